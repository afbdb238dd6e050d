//! Application state for the fitness tracker.
//!
//! [`App`] owns the store, the session, the workout collection and all
//! per-screen UI state. Every mutation that has a persisted counterpart is
//! written through to the store immediately.

use crate::application::profile::ProfileEditor;
use crate::application::router::{NAV_ROUTES, Route, Router, View, resolve_view};
use crate::application::session::SessionManager;
use crate::application::tasks::{BackgroundTasks, GatewayEvent};
use crate::domain::{
    AuthError, AuthField, AuthForm, AuthMode, DashboardStats, Exercise, FormErrors, FormMode,
    NotificationSetting, Quote, Theme, User, WorkoutInsights, Workout, default_notifications,
    partition, seed_workouts, toggle_completion, toggle_notification,
};
use crate::infrastructure::{
    CsvExporter, KeyValueStore, copy_to_clipboard, keys, load_json, save_json,
};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Screen navigation and shortcuts
    Normal,
    /// Typing into a text input (profile field or exercise search)
    Editing,
    /// Help overlay is displayed
    Help,
}

/// The sign-in screen.
#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    pub form: AuthForm,
    pub focus: usize,
    pub errors: FormErrors,
    pub general_error: Option<String>,
}

impl AuthScreen {
    pub fn focused_field(&self) -> AuthField {
        let fields = AuthField::fields_for(self.form.mode);
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % AuthField::fields_for(self.form.mode).len();
    }

    pub fn focus_previous(&mut self) {
        let count = AuthField::fields_for(self.form.mode).len();
        self.focus = (self.focus + count - 1) % count;
    }

    /// Typing into a field clears that field's error and the general banner.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        self.form.field_mut(field).push(c);
        self.errors.clear_field(field);
        self.general_error = None;
    }

    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        self.form.field_mut(field).pop();
        self.errors.clear_field(field);
        self.general_error = None;
    }

    /// Switches between login and registration, dropping all errors.
    pub fn toggle_mode(&mut self) {
        self.form.mode = match self.form.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
        self.focus = 0;
        self.errors = FormErrors::default();
        self.general_error = None;
    }
}

/// The integrations screen: quote card and exercise search.
#[derive(Debug, Clone, Default)]
pub struct IntegrationsState {
    pub quote: Option<Quote>,
    pub loading_quote: bool,
    pub exercises: Vec<Exercise>,
    pub loading_exercises: bool,
    pub query: String,
    pub loaded: bool,
}

pub struct App {
    store: Box<dyn KeyValueStore>,
    pub session: SessionManager,
    pub theme: Theme,
    pub workouts: Vec<Arc<Workout>>,
    pub notifications: Vec<NotificationSetting>,
    pub route: Route,
    pub mode: AppMode,
    pub auth: AuthScreen,
    pub profile: ProfileEditor,
    pub integrations: IntegrationsState,
    /// Highlighted row on list screens
    pub selected: usize,
    pub help_scroll: usize,
    pub status_message: Option<String>,
    export_dir: PathBuf,
    tasks: Option<BackgroundTasks>,
}

impl App {
    /// Builds the application from whatever the store holds: the session,
    /// the theme and the workouts (falling back to the seed list).
    pub fn init(store: Box<dyn KeyValueStore>, auth_mode: AuthMode, now: DateTime<Utc>) -> Self {
        let session = SessionManager::restore(auth_mode, store.as_ref());
        let theme = Theme::from_stored(store.get(keys::THEME).as_deref());
        let workouts = load_workouts(store.as_ref(), now);
        let route = Router::guard(Route::Dashboard, session.is_authenticated());

        Self {
            store,
            session,
            theme,
            workouts,
            notifications: default_notifications(),
            route,
            mode: AppMode::Normal,
            auth: AuthScreen::default(),
            profile: ProfileEditor::default(),
            integrations: IntegrationsState::default(),
            selected: 0,
            help_scroll: 0,
            status_message: None,
            export_dir: PathBuf::from("."),
            tasks: None,
        }
    }

    /// Attaches the worker that serves quote and exercise requests.
    pub fn with_tasks(mut self, tasks: BackgroundTasks) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Directory that receives CSV exports.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn view(&self) -> View<'_> {
        resolve_view(&self.route, &self.workouts)
    }

    // Navigation

    pub fn navigate(&mut self, route: Route) {
        let route = Router::guard(route, self.session.is_authenticated());
        tracing::debug!(path = %route.path(), "navigate");

        if route == Route::Integrations && !self.integrations.loaded {
            self.integrations.loaded = true;
            self.refresh_quote();
            self.search_exercises();
        }

        self.route = route;
        self.selected = 0;
        self.mode = AppMode::Normal;
        self.profile.cancel();
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    /// Moves to the next or previous sidebar entry.
    pub fn cycle_page(&mut self, forward: bool) {
        let current = NAV_ROUTES.iter().position(|route| *route == self.route).unwrap_or(0);
        let count = NAV_ROUTES.len();
        let next = if forward { (current + 1) % count } else { (current + count - 1) % count };
        self.navigate(NAV_ROUTES[next].clone());
    }

    pub fn back_to_dashboard(&mut self) {
        self.navigate(Route::Dashboard);
    }

    // Authentication

    pub fn submit_auth(&mut self) {
        match self.session.login(self.store.as_mut(), &self.auth.form) {
            Ok(_) => {
                self.auth = AuthScreen::default();
                self.navigate(Route::Dashboard);
                self.report_session_write();
            }
            Err(AuthError::Validation(errors)) => {
                self.auth.general_error = errors.general_message().map(str::to_string);
                self.auth.errors = errors;
            }
            Err(err @ AuthError::IncorrectPassword) => {
                self.auth.errors = FormErrors::default();
                self.auth.general_error = Some(err.to_string());
            }
        }
    }

    /// Ends the session and tears down per-user screen state. Theme and
    /// workouts survive.
    pub fn logout(&mut self) {
        self.session.logout(self.store.as_mut());
        self.auth = AuthScreen::default();
        self.profile = ProfileEditor::default();
        self.integrations = IntegrationsState::default();
        self.notifications = default_notifications();
        self.status_message = None;
        self.navigate(Route::Dashboard);
        self.report_session_write();
    }

    fn report_session_write(&mut self) {
        if let Some(err) = self.session.take_write_error() {
            self.status_message = Some(format!("Could not save session: {err}"));
        }
    }

    // Theme

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(keys::THEME, self.theme.as_str().to_string()) {
            tracing::warn!(error = %err, "failed to persist theme");
            self.status_message = Some(format!("Could not save theme: {err}"));
        }
    }

    // Workouts

    pub fn partitioned(&self, now: DateTime<Utc>) -> (Vec<Arc<Workout>>, Vec<Arc<Workout>>) {
        partition(&self.workouts, now)
    }

    /// Dashboard rows in display order: upcoming first, then history.
    pub fn dashboard_entries(&self, now: DateTime<Utc>) -> Vec<Arc<Workout>> {
        let (mut upcoming, past) = self.partitioned(now);
        upcoming.extend(past);
        upcoming
    }

    pub fn dashboard_stats(&self, now: DateTime<Utc>) -> DashboardStats {
        let (upcoming, past) = self.partitioned(now);
        DashboardStats::from_partition(&upcoming, &past)
    }

    pub fn selected_workout(&self, now: DateTime<Utc>) -> Option<Arc<Workout>> {
        self.dashboard_entries(now).get(self.selected).cloned()
    }

    pub fn open_workout(&mut self, id: &str) {
        self.navigate(Route::WorkoutDetail(id.to_string()));
    }

    pub fn toggle_workout(&mut self, id: &str) {
        self.workouts = toggle_completion(&self.workouts, id);
        if let Err(err) = save_json(self.store.as_mut(), keys::WORKOUTS, &self.workouts) {
            tracing::warn!(error = %err, "failed to persist workouts");
            self.status_message = Some(format!("Could not save workouts: {err}"));
        }
    }

    pub fn share_workout(&mut self, id: &str) {
        let Some(workout) = self.workouts.iter().find(|workout| workout.id == id) else {
            return;
        };
        let text = WorkoutInsights::share_text(workout);
        self.status_message = Some(match copy_to_clipboard(&text) {
            Ok(()) => "Workout summary copied to clipboard".to_string(),
            Err(err) => format!("Clipboard unavailable: {err}"),
        });
    }

    pub fn export_workouts(&mut self) {
        let path = self.export_dir.join("fittrack-workouts.csv");
        self.status_message = Some(match CsvExporter::export_workouts(&self.workouts, &path) {
            Ok(path) => format!("Exported workouts to {}", path.display()),
            Err(err) => format!("Export failed: {err}"),
        });
    }

    pub fn export_analytics(&mut self) {
        self.status_message = Some(match CsvExporter::export_analytics(&self.export_dir) {
            Ok(paths) => format!("Exported {} files to {}", paths.len(), self.export_dir.display()),
            Err(err) => format!("Export failed: {err}"),
        });
    }

    // Notifications

    pub fn toggle_notification(&mut self, id: &str) {
        self.notifications = toggle_notification(&self.notifications, id);
    }

    // Profile

    pub fn start_profile_edit(&mut self) {
        if let Some(user) = self.session.current() {
            self.profile.begin(user);
            self.mode = AppMode::Editing;
        }
    }

    pub fn cancel_profile_edit(&mut self) {
        self.profile.cancel();
        self.mode = AppMode::Normal;
    }

    pub fn commit_profile_edit(&mut self) {
        let field = self.profile.field();
        let result = field
            .to_patch(&self.profile.input)
            .and_then(|patch| self.session.update_user(self.store.as_mut(), patch));

        self.status_message = Some(match result {
            Ok(_) => format!("{} updated", field.label()),
            Err(err) => err.to_string(),
        });
        self.report_session_write();
        self.cancel_profile_edit();
    }

    // Integrations

    pub fn refresh_quote(&mut self) {
        if let Some(tasks) = &self.tasks {
            self.integrations.loading_quote = true;
            tasks.request_quote();
        } else {
            self.integrations.quote = Some(Quote::fallback());
        }
    }

    pub fn search_exercises(&mut self) {
        if let Some(tasks) = &self.tasks {
            self.integrations.loading_exercises = true;
            tasks.request_exercises(&self.integrations.query);
        }
    }

    pub fn start_search(&mut self) {
        self.mode = AppMode::Editing;
    }

    pub fn finish_search(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Every keystroke issues a fresh search.
    pub fn set_search_query(&mut self, query: String) {
        self.integrations.query = query;
        self.search_exercises();
    }

    pub fn reset_search(&mut self) {
        self.integrations.query.clear();
        self.search_exercises();
    }

    pub fn apply_gateway_event(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::Quote(quote) => {
                self.integrations.quote = Some(quote);
                self.integrations.loading_quote = false;
            }
            GatewayEvent::Exercises { query, results } => {
                if query != self.integrations.query {
                    tracing::debug!(%query, current = %self.integrations.query, "applying out-of-date search results");
                }
                self.integrations.exercises = results;
                self.integrations.loading_exercises = false;
            }
        }
    }

    /// Applies every gateway result that has arrived. Returns whether
    /// anything changed.
    pub fn poll_background(&mut self) -> bool {
        let events = match &self.tasks {
            Some(tasks) => tasks.drain(),
            None => return false,
        };
        let changed = !events.is_empty();
        for event in events {
            self.apply_gateway_event(event);
        }
        changed
    }

    pub fn tasks(&self) -> Option<&BackgroundTasks> {
        self.tasks.as_ref()
    }

    // Selection

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The stored collection if present and readable, otherwise the seed list.
fn load_workouts(store: &dyn KeyValueStore, now: DateTime<Utc>) -> Vec<Arc<Workout>> {
    match load_json::<Vec<Arc<Workout>>>(store, keys::WORKOUTS) {
        Some(workouts) if !workouts.is_empty() => workouts,
        _ => {
            tracing::info!("no stored workouts, using seed list");
            seed_workouts(now).into_iter().map(Arc::new).collect()
        }
    }
}
