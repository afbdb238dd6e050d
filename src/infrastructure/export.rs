use crate::domain::{DailyActivity, WEEKLY_ACTIVITY, WEIGHT_TREND, WeightEntry, Workout};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct WorkoutRow<'a> {
    id: &'a str,
    title: &'a str,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    duration_min: u32,
    calories: u32,
    distance_km: Option<f64>,
    heart_rate_bpm: Option<u32>,
    intensity: Option<String>,
    completed: bool,
}

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the workout list to `path` and returns the path written.
    pub fn export_workouts(workouts: &[Arc<Workout>], path: &Path) -> Result<PathBuf, ExportError> {
        let rows = workouts.iter().map(|workout| WorkoutRow {
            id: &workout.id,
            title: &workout.title,
            date: workout.date.to_rfc3339(),
            kind: workout.kind.to_string(),
            duration_min: workout.duration,
            calories: workout.calories,
            distance_km: workout.distance,
            heart_rate_bpm: workout.heart_rate,
            intensity: workout.intensity.map(|intensity| intensity.to_string()),
            completed: workout.is_completed(),
        });
        Self::write_rows(path, rows)?;
        Ok(path.to_path_buf())
    }

    /// Writes the analytics series into `dir` as two CSV files.
    pub fn export_analytics(dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        let activity = dir.join("fittrack-activity.csv");
        let weight = dir.join("fittrack-weight.csv");

        Self::write_rows::<&DailyActivity>(&activity, WEEKLY_ACTIVITY.iter())?;
        Self::write_rows::<&WeightEntry>(&weight, WEIGHT_TREND.iter())?;

        tracing::info!(dir = %dir.display(), "exported analytics");
        Ok(vec![activity, weight])
    }

    fn write_rows<T: Serialize>(
        path: &Path,
        rows: impl IntoIterator<Item = T>,
    ) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_workouts;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn test_export_workouts() {
        let dir = tempdir().unwrap();
        let workouts: Vec<_> = seed_workouts(Utc::now()).into_iter().map(Arc::new).collect();
        let path = CsvExporter::export_workouts(&workouts, &dir.path().join("workouts.csv")).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("id,title,date,type,duration_min"));
        assert!(lines[2].contains("Morning Run"));
        assert!(lines[2].contains("5.2"));
        assert!(lines[2].ends_with("Moderate,true"));
    }

    #[test]
    fn test_export_analytics() {
        let dir = tempdir().unwrap();
        let paths = CsvExporter::export_analytics(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);

        let activity = fs::read_to_string(&paths[0]).unwrap();
        assert!(activity.starts_with("day,calories,steps\n"));
        assert!(activity.contains("Wed,9800,5000"));

        let weight = fs::read_to_string(&paths[1]).unwrap();
        assert!(weight.contains("Week 5,70.0"));
    }
}
