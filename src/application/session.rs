//! The signed-in user and the login / logout / profile-update workflows.

use crate::domain::{
    AuthError, AuthForm, AuthMode, AuthResult, DEFAULT_AVATAR, FormMode, SessionError,
    SessionResult, User, UserPatch,
};
use crate::infrastructure::{KeyValueStore, StorageResult, keys, load_json, save_json};

/// The only password the validated login accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Owns the current user and mirrors it to the session key.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    current: Option<User>,
    mode: AuthMode,
    /// Last failed write of the session key, until the caller takes it
    write_error: Option<String>,
}

impl SessionManager {
    pub fn new(mode: AuthMode) -> Self {
        Self { current: None, mode, write_error: None }
    }

    /// Picks up a session persisted by an earlier run. A corrupt stored user
    /// means no session.
    pub fn restore(mode: AuthMode, store: &dyn KeyValueStore) -> Self {
        let current = load_json::<User>(store, keys::USER);
        if let Some(user) = &current {
            tracing::info!(username = %user.username, "restored session");
        }
        Self { current, mode, write_error: None }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The session stays usable when the store rejects a write; the failure
    /// is kept here for the UI to report.
    pub fn take_write_error(&mut self) -> Option<String> {
        self.write_error.take()
    }

    fn record_write(&mut self, result: StorageResult<()>) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to write stored session");
            self.write_error = Some(err.to_string());
        }
    }

    /// Signs in with the submitted form, replacing any existing session.
    ///
    /// In [`AuthMode::Validated`] the form must pass field validation, and a
    /// login (not a registration) must use [`DEMO_PASSWORD`].
    pub fn login(&mut self, store: &mut dyn KeyValueStore, form: &AuthForm) -> AuthResult<User> {
        if self.mode == AuthMode::Validated {
            let errors = form.validate();
            if !errors.is_empty() {
                tracing::debug!(invalid = errors.len(), "auth form rejected");
                return Err(AuthError::Validation(errors));
            }
            if form.mode == FormMode::Login && form.password != DEMO_PASSWORD {
                tracing::info!(username = %form.username, "login with wrong password");
                return Err(AuthError::IncorrectPassword);
            }
        }

        let user = user_from_form(form);
        let written = save_json(store, keys::USER, &user);
        self.record_write(written);
        tracing::info!(username = %user.username, "signed in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Ends the session. Workouts and theme stay in the store.
    pub fn logout(&mut self, store: &mut dyn KeyValueStore) {
        if let Some(user) = self.current.take() {
            tracing::info!(username = %user.username, "signed out");
        }
        let removed = store.remove(keys::USER);
        self.record_write(removed);
    }

    pub fn update_user(
        &mut self,
        store: &mut dyn KeyValueStore,
        patch: UserPatch,
    ) -> SessionResult<User> {
        let user = self.current.as_mut().ok_or(SessionError::NoActiveUser)?;
        user.apply(patch);
        let user = user.clone();
        let written = save_json(store, keys::USER, &user);
        self.record_write(written);
        Ok(user)
    }
}

fn user_from_form(form: &AuthForm) -> User {
    fn or_default(value: &str, default: &str) -> String {
        if value.is_empty() { default.to_string() } else { value.to_string() }
    }

    let age = form
        .age
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|age| *age != 0)
        .unwrap_or(25);

    User {
        name: or_default(&form.name, "Demo User"),
        username: or_default(&form.username, "demouser"),
        email: or_default(&form.email, "user@fittrack.com"),
        age,
        height: None,
        weight: None,
        goal: None,
        target_weight: None,
        avatar: Some(DEFAULT_AVATAR.to_string()),
    }
}
