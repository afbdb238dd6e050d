//! Bundled data: the first-run workout seed, the default notification
//! preferences, the exercise catalog and the static analytics series.

use super::models::{Exercise, Intensity, NotificationSetting, Workout, WorkoutType};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// One bar of the weekly activity chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyActivity {
    pub day: &'static str,
    pub calories: u64,
    pub steps: u64,
}

/// One point of the weight trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightEntry {
    pub week: &'static str,
    pub weight: f64,
}

pub const WEEKLY_ACTIVITY: [DailyActivity; 7] = [
    DailyActivity { day: "Mon", calories: 2400, steps: 8000 },
    DailyActivity { day: "Tue", calories: 1398, steps: 12000 },
    DailyActivity { day: "Wed", calories: 9800, steps: 5000 },
    DailyActivity { day: "Thu", calories: 3908, steps: 9000 },
    DailyActivity { day: "Fri", calories: 4800, steps: 11000 },
    DailyActivity { day: "Sat", calories: 3800, steps: 15000 },
    DailyActivity { day: "Sun", calories: 4300, steps: 7000 },
];

pub const WEIGHT_TREND: [WeightEntry; 5] = [
    WeightEntry { week: "Week 1", weight: 72.0 },
    WeightEntry { week: "Week 2", weight: 71.5 },
    WeightEntry { week: "Week 3", weight: 71.2 },
    WeightEntry { week: "Week 4", weight: 70.8 },
    WeightEntry { week: "Week 5", weight: 70.0 },
];

/// The five workouts a fresh install starts with, dated relative to `now`:
/// one upcoming session and four in the recent past.
pub fn seed_workouts(now: DateTime<Utc>) -> Vec<Workout> {
    vec![
        Workout {
            id: "0".to_string(),
            title: "Evening Yoga".to_string(),
            date: now + Duration::hours(5),
            duration: 30,
            calories: 120,
            kind: WorkoutType::Yoga,
            distance: None,
            heart_rate: None,
            description: Some("Relaxing flow before bed.".to_string()),
            intensity: Some(Intensity::Low),
            image: Some("https://picsum.photos/id/65/800/400".to_string()),
            completed: Some(false),
        },
        Workout {
            id: "1".to_string(),
            title: "Morning Run".to_string(),
            date: now - Duration::hours(2),
            duration: 45,
            calories: 450,
            kind: WorkoutType::Running,
            distance: Some(5.2),
            heart_rate: Some(145),
            description: Some(
                "Great morning run through the park. Weather was perfect and felt strong throughout the workout."
                    .to_string(),
            ),
            intensity: Some(Intensity::Moderate),
            image: Some("https://picsum.photos/id/73/800/400".to_string()),
            completed: Some(true),
        },
        Workout {
            id: "2".to_string(),
            title: "Weight Training".to_string(),
            date: now - Duration::hours(24),
            duration: 60,
            calories: 320,
            kind: WorkoutType::WeightTraining,
            distance: None,
            heart_rate: None,
            description: Some("Upper body focus. Hit new PR on bench press.".to_string()),
            intensity: Some(Intensity::High),
            image: Some("https://picsum.photos/id/20/800/400".to_string()),
            completed: Some(true),
        },
        Workout {
            id: "3".to_string(),
            title: "Cycling".to_string(),
            date: now - Duration::hours(48),
            duration: 30,
            calories: 280,
            kind: WorkoutType::Cycling,
            distance: Some(10.0),
            heart_rate: None,
            description: Some("Indoor cycling session.".to_string()),
            intensity: Some(Intensity::Moderate),
            image: Some("https://picsum.photos/id/74/800/400".to_string()),
            completed: Some(true),
        },
        Workout {
            id: "4".to_string(),
            title: "Yoga Flow".to_string(),
            date: now - Duration::hours(72),
            duration: 45,
            calories: 150,
            kind: WorkoutType::Yoga,
            distance: None,
            heart_rate: None,
            description: Some("Restorative yoga to help with recovery.".to_string()),
            intensity: Some(Intensity::Low),
            image: Some("https://picsum.photos/id/65/800/400".to_string()),
            completed: Some(true),
        },
    ]
}

pub fn default_notifications() -> Vec<NotificationSetting> {
    [
        ("1", "reminder", "Workout Reminders", "Get reminded to complete your daily workout", true),
        ("2", "goal", "Goal Alerts", "Notifications when you reach your fitness goals", true),
        ("3", "report", "Weekly Reports", "Summary of your weekly fitness progress", true),
        ("4", "badge", "Achievement Badges", "Celebrate when you unlock new achievements", true),
        ("5", "social", "Friend Activity", "Updates when your friends complete workouts", false),
    ]
    .into_iter()
    .map(|(id, kind, title, description, enabled)| NotificationSetting {
        id: id.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        enabled,
    })
    .collect()
}

pub fn exercise_catalog() -> Vec<Exercise> {
    [
        ("1", "Push-ups", "Chest", "Beginner", "Keep body straight, lower until chest touches floor."),
        ("2", "Squats", "Legs", "Beginner", "Feet shoulder width apart, lower hips back and down."),
        ("3", "Plank", "Abs", "Intermediate", "Hold push-up position on elbows."),
        (
            "4",
            "Lunges",
            "Legs",
            "Beginner",
            "Step forward with one leg, lower hips until both knees are bent at 90 degrees.",
        ),
        ("5", "Burpees", "Full Body", "Advanced", "Squat, kick feet back, push-up, jump forward, jump up."),
        ("6", "Pull-ups", "Back", "Intermediate", "Hang from bar, pull chin over bar."),
    ]
    .into_iter()
    .map(|(id, name, muscle_group, difficulty, instructions)| Exercise {
        id: id.to_string(),
        name: name.to_string(),
        muscle_group: muscle_group.to_string(),
        difficulty: difficulty.to_string(),
        instructions: instructions.to_string(),
    })
    .collect()
}
