//! Screen routing with an authentication guard.

use crate::domain::Workout;
use std::sync::Arc;

/// A navigable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Auth,
    Dashboard,
    WorkoutDetail(String),
    Analytics,
    Profile,
    Notifications,
    Integrations,
}

/// Sidebar order.
pub const NAV_ROUTES: [Route; 5] = [
    Route::Dashboard,
    Route::Analytics,
    Route::Integrations,
    Route::Notifications,
    Route::Profile,
];

impl Route {
    /// Maps a path to a route. Unknown paths go to the dashboard.
    ///
    /// ```
    /// use fittrack::application::Route;
    ///
    /// assert_eq!(Route::from_path("/workout/3"), Route::WorkoutDetail("3".to_string()));
    /// assert_eq!(Route::from_path("/settings"), Route::Profile);
    /// assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.splitn(2, '/');
        let head = segments.next().unwrap_or_default();
        let rest = segments.next();

        match (head, rest) {
            ("" | "dashboard", None) => Route::Dashboard,
            ("login" | "auth", None) => Route::Auth,
            ("analytics", None) => Route::Analytics,
            ("profile" | "settings", None) => Route::Profile,
            ("notifications", None) => Route::Notifications,
            ("integrations", None) => Route::Integrations,
            ("workout", Some(id)) if !id.is_empty() && !id.contains('/') => {
                Route::WorkoutDetail(id.to_string())
            }
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Auth => "/login".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::WorkoutDetail(id) => format!("/workout/{id}"),
            Route::Analytics => "/analytics".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Notifications => "/notifications".to_string(),
            Route::Integrations => "/integrations".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Auth => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::WorkoutDetail(_) => "Workout",
            Route::Analytics => "Analytics",
            Route::Profile => "Profile",
            Route::Notifications => "Notifications",
            Route::Integrations => "Integrations",
        }
    }
}

pub struct Router;

impl Router {
    /// Without a session only the auth screen is reachable; with one, the
    /// auth screen redirects to the dashboard.
    pub fn guard(route: Route, has_session: bool) -> Route {
        match (route, has_session) {
            (_, false) => Route::Auth,
            (Route::Auth, true) => Route::Dashboard,
            (route, true) => route,
        }
    }
}

/// What a route renders once its data is looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Auth,
    Dashboard,
    WorkoutDetail(&'a Arc<Workout>),
    WorkoutNotFound(&'a str),
    Analytics,
    Profile,
    Notifications,
    Integrations,
}

pub fn resolve_view<'a>(route: &'a Route, workouts: &'a [Arc<Workout>]) -> View<'a> {
    match route {
        Route::Auth => View::Auth,
        Route::Dashboard => View::Dashboard,
        Route::WorkoutDetail(id) => workouts
            .iter()
            .find(|workout| &workout.id == id)
            .map(View::WorkoutDetail)
            .unwrap_or(View::WorkoutNotFound(id)),
        Route::Analytics => View::Analytics,
        Route::Profile => View::Profile,
        Route::Notifications => View::Notifications,
        Route::Integrations => View::Integrations,
    }
}
