//! Pure workout services: upcoming/history partitioning, completion toggling
//! and the derived numbers shown on the dashboard and detail screens.

use super::models::{Exercise, Intensity, NotificationSetting, Workout};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Splits `workouts` into `(upcoming, past)` relative to `now`.
///
/// A workout is upcoming only if its date is strictly later than `now`, so a
/// workout scheduled exactly at `now` lands in the past list. Both outputs keep
/// input order and share the input allocations.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::Utc;
/// use fittrack::domain::{partition, seed_workouts};
///
/// let now = Utc::now();
/// let workouts: Vec<_> = seed_workouts(now).into_iter().map(Arc::new).collect();
/// let (upcoming, past) = partition(&workouts, now);
///
/// assert_eq!(upcoming.len(), 1);
/// assert_eq!(past.len(), 4);
/// ```
pub fn partition(
    workouts: &[Arc<Workout>],
    now: DateTime<Utc>,
) -> (Vec<Arc<Workout>>, Vec<Arc<Workout>>) {
    workouts
        .iter()
        .cloned()
        .partition(|workout| workout.date > now)
}

/// Returns a copy of `workouts` with the completion flag of `id` inverted.
///
/// Entries other than the match are the same `Arc`s as the input, so a
/// renderer can detect the change with [`Arc::ptr_eq`]. An unknown `id`
/// yields a collection equal to the input.
pub fn toggle_completion(workouts: &[Arc<Workout>], id: &str) -> Vec<Arc<Workout>> {
    workouts
        .iter()
        .map(|workout| {
            if workout.id == id {
                let mut toggled = Workout::clone(workout);
                toggled.completed = Some(!workout.is_completed());
                Arc::new(toggled)
            } else {
                Arc::clone(workout)
            }
        })
        .collect()
}

/// Same contract as [`toggle_completion`] for notification preferences.
pub fn toggle_notification(settings: &[NotificationSetting], id: &str) -> Vec<NotificationSetting> {
    settings
        .iter()
        .map(|setting| {
            if setting.id == id {
                NotificationSetting { enabled: !setting.enabled, ..setting.clone() }
            } else {
                setting.clone()
            }
        })
        .collect()
}

/// Filters the exercise catalog by a case-insensitive substring of the name
/// or muscle group. An empty query returns everything.
pub fn search_catalog(catalog: &[Exercise], query: &str) -> Vec<Exercise> {
    if query.is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|exercise| {
            exercise.name.to_lowercase().contains(&needle)
                || exercise.muscle_group.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Derived facts about a single workout for the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutInsights {
    /// Minutes per kilometre, rounded to two decimals
    pub pace: Option<f64>,
    pub status: &'static str,
    /// Share of the intensity bar to fill
    pub intensity_level: f64,
}

impl WorkoutInsights {
    pub fn for_workout(workout: &Workout) -> Self {
        let pace = workout
            .distance
            .filter(|distance| *distance > 0.0 && workout.duration > 0)
            .map(|distance| (f64::from(workout.duration) / distance * 100.0).round() / 100.0);

        let status = if workout.is_completed() { "Completed" } else { "Planned" };

        let intensity_level = match workout.intensity {
            Some(Intensity::High) => 0.75,
            Some(Intensity::Moderate) => 0.5,
            Some(Intensity::Low) | None => 0.25,
        };

        Self { pace, status, intensity_level }
    }

    /// Plain-text summary used when sharing a workout.
    pub fn share_text(workout: &Workout) -> String {
        let insights = Self::for_workout(workout);
        let mut text = format!(
            "{} ({}) - {} min, {} kcal",
            workout.title, workout.kind, workout.duration, workout.calories
        );
        if let Some(distance) = workout.distance {
            text.push_str(&format!(", {distance} km"));
        }
        if let Some(pace) = insights.pace {
            text.push_str(&format!(", {pace} min/km"));
        }
        text.push_str(&format!(" [{}]", insights.status));
        text
    }
}

/// Headline numbers for the dashboard stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub calories_burned: u64,
    pub active_minutes: u64,
    pub completed: usize,
    pub total: usize,
    pub upcoming: usize,
}

impl DashboardStats {
    /// Calories and active time count completed workouts in the history list.
    pub fn from_partition(upcoming: &[Arc<Workout>], past: &[Arc<Workout>]) -> Self {
        let done = past.iter().filter(|workout| workout.is_completed());
        let (calories_burned, active_minutes) = done.fold((0u64, 0u64), |(calories, minutes), workout| {
            (
                calories.saturating_add(u64::from(workout.calories)),
                minutes.saturating_add(u64::from(workout.duration)),
            )
        });

        let completed = upcoming
            .iter()
            .chain(past)
            .filter(|workout| workout.is_completed())
            .count();

        Self {
            calories_burned,
            active_minutes,
            completed,
            total: upcoming.len() + past.len(),
            upcoming: upcoming.len(),
        }
    }

    pub fn active_time_label(&self) -> String {
        format!("{}h {}m", self.active_minutes / 60, self.active_minutes % 60)
    }

    pub fn goals_label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_notifications, exercise_catalog, seed_workouts};
    use chrono::Duration;

    fn seeded(now: DateTime<Utc>) -> Vec<Arc<Workout>> {
        seed_workouts(now).into_iter().map(Arc::new).collect()
    }

    fn ids(workouts: &[Arc<Workout>]) -> Vec<&str> {
        workouts.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_partition_splits_on_now() {
        let now = Utc::now();
        let (upcoming, past) = partition(&seeded(now), now);

        assert_eq!(ids(&upcoming), vec!["0"]);
        assert_eq!(ids(&past), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_partition_keeps_input_order_and_every_element() {
        let now = Utc::now();
        let mut workouts = seeded(now);
        workouts.reverse();
        let mut future = Workout::clone(&workouts[4]);
        future.id = "5".to_string();
        future.date = now + Duration::days(3);
        workouts.insert(1, Arc::new(future));

        let (upcoming, past) = partition(&workouts, now);

        assert_eq!(ids(&upcoming), vec!["5", "0"]);
        assert_eq!(ids(&past), vec!["4", "3", "2", "1"]);
        assert_eq!(upcoming.len() + past.len(), workouts.len());
    }

    #[test]
    fn test_partition_at_exactly_now_is_past() {
        let now = Utc::now();
        let mut workout = seed_workouts(now).remove(0);
        workout.date = now;

        let (upcoming, past) = partition(&[Arc::new(workout)], now);
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn test_partition_empty() {
        let (upcoming, past) = partition(&[], Utc::now());
        assert!(upcoming.is_empty());
        assert!(past.is_empty());
    }

    #[test]
    fn test_partition_shares_allocations() {
        let now = Utc::now();
        let workouts = seeded(now);
        let (upcoming, past) = partition(&workouts, now);

        assert!(Arc::ptr_eq(&upcoming[0], &workouts[0]));
        assert!(Arc::ptr_eq(&past[0], &workouts[1]));
    }

    #[test]
    fn test_toggle_completion_flips_only_match() {
        let workouts = seeded(Utc::now());
        let toggled = toggle_completion(&workouts, "1");

        assert_eq!(toggled[1].completed, Some(false));
        assert_eq!(workouts[1].completed, Some(true));
        for index in [0, 2, 3, 4] {
            assert!(Arc::ptr_eq(&toggled[index], &workouts[index]));
        }
        assert!(!Arc::ptr_eq(&toggled[1], &workouts[1]));
    }

    #[test]
    fn test_toggle_completion_twice_restores_value() {
        let workouts = seeded(Utc::now());
        let twice = toggle_completion(&toggle_completion(&workouts, "2"), "2");
        assert_eq!(twice, workouts);
    }

    #[test]
    fn test_toggle_completion_unknown_id_is_noop() {
        let workouts = seeded(Utc::now());
        let result = toggle_completion(&workouts, "missing");

        assert_eq!(result, workouts);
        assert!(result.iter().zip(&workouts).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_toggle_completion_treats_missing_flag_as_false() {
        let mut workout = seed_workouts(Utc::now()).remove(0);
        workout.completed = None;

        let toggled = toggle_completion(&[Arc::new(workout)], "0");
        assert_eq!(toggled[0].completed, Some(true));
    }

    #[test]
    fn test_toggle_notification() {
        let settings = default_notifications();
        let toggled = toggle_notification(&settings, "5");

        assert!(toggled[4].enabled);
        assert_eq!(&toggled[..4], &settings[..4]);
        assert_eq!(toggle_notification(&settings, "nope"), settings);
    }

    #[test]
    fn test_search_catalog_empty_query_returns_everything() {
        let catalog = exercise_catalog();
        assert_eq!(search_catalog(&catalog, ""), catalog);
    }

    #[test]
    fn test_search_catalog_matches_muscle_group_case_insensitively() {
        let catalog = exercise_catalog();
        let names: Vec<_> = search_catalog(&catalog, "LEG")
            .into_iter()
            .map(|exercise| exercise.name)
            .collect();
        assert_eq!(names, vec!["Squats", "Lunges"]);
    }

    #[test]
    fn test_search_catalog_matches_name() {
        let catalog = exercise_catalog();
        let found = search_catalog(&catalog, "pull");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pull-ups");
        assert!(search_catalog(&catalog, "zumba").is_empty());
    }

    #[test]
    fn test_insights_pace_and_status() {
        let workouts = seed_workouts(Utc::now());
        let run = WorkoutInsights::for_workout(&workouts[1]);
        assert_eq!(run.pace, Some(8.65));
        assert_eq!(run.status, "Completed");
        assert_eq!(run.intensity_level, 0.5);

        let yoga = WorkoutInsights::for_workout(&workouts[0]);
        assert_eq!(yoga.pace, None);
        assert_eq!(yoga.status, "Planned");
        assert_eq!(yoga.intensity_level, 0.25);
    }

    #[test]
    fn test_share_text() {
        let workouts = seed_workouts(Utc::now());
        assert_eq!(
            WorkoutInsights::share_text(&workouts[1]),
            "Morning Run (Running) - 45 min, 450 kcal, 5.2 km, 8.65 min/km [Completed]"
        );
    }

    #[test]
    fn test_dashboard_stats() {
        let now = Utc::now();
        let (upcoming, past) = partition(&seeded(now), now);
        let stats = DashboardStats::from_partition(&upcoming, &past);

        assert_eq!(stats.calories_burned, 450 + 320 + 280 + 150);
        assert_eq!(stats.active_minutes, 180);
        assert_eq!(stats.active_time_label(), "3h 0m");
        assert_eq!(stats.goals_label(), "4/5");
        assert_eq!(stats.upcoming, 1);
    }

    #[test]
    fn test_dashboard_stats_totals_exceed_u32() {
        let now = Utc::now();
        let mut workouts = seed_workouts(now);
        workouts[1].calories = u32::MAX;
        workouts[1].duration = u32::MAX;
        workouts[2].calories = 10;
        let past: Vec<Arc<Workout>> = workouts.into_iter().skip(1).map(Arc::new).collect();

        let stats = DashboardStats::from_partition(&[], &past);

        assert_eq!(stats.calories_burned, u64::from(u32::MAX) + 10 + 280 + 150);
        assert!(stats.active_minutes > u64::from(u32::MAX));
    }
}
