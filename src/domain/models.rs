use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar assigned to every freshly authenticated user.
pub const DEFAULT_AVATAR: &str = "https://picsum.photos/id/64/200/200";

/// The signed-in user.
///
/// Only `age` has a validated range (13-120), and only at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    /// Height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Merges every field present in `patch` into this user.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
        if let Some(goal) = patch.goal {
            self.goal = Some(goal);
        }
        if let Some(target_weight) = patch.target_weight {
            self.target_weight = Some(target_weight);
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
    }
}

/// A partial update to a [`User`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub goal: Option<String>,
    pub target_weight: Option<f64>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    Running,
    #[serde(rename = "Weight Training")]
    WeightTraining,
    Cycling,
    Yoga,
    #[serde(rename = "HIIT")]
    Hiit,
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkoutType::Running => "Running",
            WorkoutType::WeightTraining => "Weight Training",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Hiit => "HIIT",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intensity::Low => "Low",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
        };
        f.write_str(label)
    }
}

/// A scheduled or logged workout.
///
/// `id` is unique within the active collection. Workouts are shared as
/// `Arc<Workout>` so that toggling one entry leaves every other entry's
/// allocation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    /// Minutes, always positive
    pub duration: u32,
    pub calories: u32,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Workout {
    /// A missing flag counts as not completed.
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub difficulty: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// The quote shown whenever the quote service cannot be reached.
    pub fn fallback() -> Self {
        Self {
            text: "The only bad workout is the one that didn't happen.".to_string(),
            author: "Fitness Wisdom".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSetting {
    pub id: String,
    /// reminder, goal, report, badge or social
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
}

/// Colour scheme preference, persisted as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` is treated as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// How the login form is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Field validation plus the demo password check.
    #[default]
    Validated,
    /// Accept any input.
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_workout() -> Workout {
        Workout {
            id: "1".to_string(),
            title: "Morning Run".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap(),
            duration: 45,
            calories: 450,
            kind: WorkoutType::WeightTraining,
            distance: Some(5.2),
            heart_rate: Some(145),
            description: None,
            intensity: Some(Intensity::Moderate),
            image: None,
            completed: None,
        }
    }

    #[test]
    fn test_workout_uses_stored_field_names() {
        let json = serde_json::to_value(sample_workout()).unwrap();

        assert_eq!(json["type"], "Weight Training");
        assert_eq!(json["heartRate"], 145);
        assert_eq!(json["intensity"], "Moderate");
        assert!(json.get("description").is_none());
        assert!(json.get("completed").is_none());
    }

    #[test]
    fn test_workout_parses_iso_dates() {
        let raw = r#"{"id":"9","title":"HIIT Blast","date":"2024-05-01T18:00:00.000Z",
            "duration":20,"calories":300,"type":"HIIT","completed":true}"#;
        let workout: Workout = serde_json::from_str(raw).unwrap();

        assert_eq!(workout.kind, WorkoutType::Hiit);
        assert_eq!(workout.date, Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap());
        assert!(workout.is_completed());
    }

    #[test]
    fn test_missing_completed_flag_is_not_completed() {
        assert!(!sample_workout().is_completed());
    }

    #[test]
    fn test_user_apply_only_touches_present_fields() {
        let mut user = User {
            name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            age: 30,
            height: None,
            weight: Some(70.0),
            goal: None,
            target_weight: None,
            avatar: None,
        };

        user.apply(UserPatch {
            goal: Some("Run a marathon".to_string()),
            age: Some(31),
            ..UserPatch::default()
        });

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.age, 31);
        assert_eq!(user.weight, Some(70.0));
        assert_eq!(user.goal.as_deref(), Some("Run a marathon"));
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("garbage")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
