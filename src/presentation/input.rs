use crate::application::{App, AppMode, NAV_ROUTES, Route};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Editing => Self::handle_editing_mode(app, key),
            AppMode::Normal if app.route == Route::Auth => Self::handle_auth_screen(app, key, modifiers),
            AppMode::Normal => Self::handle_normal_mode(app, key),
        }
    }

    fn handle_auth_screen(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('r') {
                app.auth.toggle_mode();
            }
            return;
        }

        match key {
            KeyCode::Tab | KeyCode::Down => app.auth.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.auth.focus_previous(),
            KeyCode::F(2) => app.auth.toggle_mode(),
            KeyCode::Enter => app.submit_auth(),
            KeyCode::Backspace => app.auth.pop_char(),
            KeyCode::Char(c) => app.auth.push_char(c),
            _ => {}
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
                return;
            }
            KeyCode::Tab => {
                app.cycle_page(true);
                return;
            }
            KeyCode::BackTab => {
                app.cycle_page(false);
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                app.navigate(NAV_ROUTES[index].clone());
                return;
            }
            KeyCode::Char('t') => {
                app.toggle_theme();
                return;
            }
            KeyCode::Char('L') => {
                app.logout();
                return;
            }
            _ => {}
        }

        match app.route.clone() {
            Route::Dashboard => Self::handle_dashboard(app, key),
            Route::WorkoutDetail(id) => Self::handle_workout_detail(app, key, &id),
            Route::Analytics => {
                if key == KeyCode::Char('e') {
                    app.export_analytics();
                }
            }
            Route::Profile => Self::handle_profile(app, key),
            Route::Notifications => Self::handle_notifications(app, key),
            Route::Integrations => Self::handle_integrations(app, key),
            Route::Auth => {}
        }
    }

    fn handle_dashboard(app: &mut App, key: KeyCode) {
        let now = Utc::now();
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(app.workouts.len()),
            KeyCode::Enter => {
                if let Some(workout) = app.selected_workout(now) {
                    app.open_workout(&workout.id);
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('c') => {
                if let Some(workout) = app.selected_workout(now) {
                    app.toggle_workout(&workout.id);
                }
            }
            KeyCode::Char('x') => app.export_workouts(),
            _ => {}
        }
    }

    fn handle_workout_detail(app: &mut App, key: KeyCode, id: &str) {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_to_dashboard(),
            KeyCode::Char('c') => app.toggle_workout(id),
            KeyCode::Char('s') => app.share_workout(id),
            _ => {}
        }
    }

    fn handle_profile(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.profile.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.profile.select_next(),
            KeyCode::Enter | KeyCode::Char('e') => app.start_profile_edit(),
            _ => {}
        }
    }

    fn handle_notifications(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(app.notifications.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(setting) = app.notifications.get(app.selected) {
                    let id = setting.id.clone();
                    app.toggle_notification(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_integrations(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('r') => app.refresh_quote(),
            KeyCode::Char('a') => app.reset_search(),
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match app.route {
            Route::Profile => match key {
                KeyCode::Enter => app.commit_profile_edit(),
                KeyCode::Esc => app.cancel_profile_edit(),
                KeyCode::Backspace => {
                    app.profile.input.pop();
                }
                KeyCode::Char(c) => app.profile.input.push(c),
                _ => {}
            },
            Route::Integrations => match key {
                KeyCode::Enter | KeyCode::Esc => app.finish_search(),
                KeyCode::Backspace => {
                    let mut query = app.integrations.query.clone();
                    if query.pop().is_some() {
                        app.set_search_query(query);
                    }
                }
                KeyCode::Char(c) => {
                    let mut query = app.integrations.query.clone();
                    query.push(c);
                    app.set_search_query(query);
                }
                _ => {}
            },
            _ => app.mode = AppMode::Normal,
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
                app.help_scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthField, AuthMode, FormMode};
    use crate::infrastructure::{MemoryStore, keys};

    fn app(mode: AuthMode) -> App {
        App::init(Box::new(MemoryStore::new()), mode, Utc::now())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_login_through_keyboard() {
        let mut app = app(AuthMode::Validated);

        type_text(&mut app, "runner");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "runner@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "password");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.user().map(|user| user.username.as_str()), Some("runner"));
    }

    #[test]
    fn test_letters_on_auth_screen_are_typed_not_shortcuts() {
        let mut app = app(AuthMode::Validated);
        type_text(&mut app, "t?L");

        assert_eq!(app.auth.form.username, "t?L");
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.store().get(keys::THEME).is_none());
    }

    #[test]
    fn test_ctrl_r_switches_to_registration() {
        let mut app = app(AuthMode::Validated);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(app.auth.form.mode, FormMode::Register);
        assert_eq!(app.auth.focused_field(), AuthField::Name);
        assert!(app.auth.form.name.is_empty());
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::Analytics);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.route, Route::Profile);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_dashboard_toggle_and_open() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.workouts[1].completed, Some(false));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::WorkoutDetail("1".to_string()));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.workouts[1].completed, Some(true));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_logout_shortcut() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('L'), KeyModifiers::SHIFT);

        assert_eq!(app.route, Route::Auth);
        assert!(app.user().is_none());
    }

    #[test]
    fn test_profile_edit_via_keys() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('5'));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Editing);
        assert_eq!(app.profile.input, "user@fittrack.com");

        for _ in 0.."user@fittrack.com".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "me@fit.io");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.user().map(|user| user.email.as_str()), Some("me@fit.io"));
    }

    #[test]
    fn test_notifications_toggle_selected() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('4'));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.notifications[1].enabled);
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.help_scroll, 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_search_typing_updates_query() {
        let mut app = app(AuthMode::Demo);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Editing);
        type_text(&mut app, "legs");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.integrations.query, "leg");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
    }
}
