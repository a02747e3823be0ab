use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use super::aggregate::{ExerciseStats, saturating_sum};
use crate::db::models::{Goal, WorkoutSession};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub total_workouts: i64,
    pub total_volume: i64,
    pub total_sets: i64,
    pub days_active: i64,
}

/// Profile totals over finished sessions. Active sessions do not count.
///
/// `days_active` is the number of distinct UTC calendar dates on which a
/// session was finished.
pub fn compute_profile_stats(sessions: &[WorkoutSession]) -> ProfileStats {
    let finished: Vec<(&WorkoutSession, DateTime<Utc>)> = sessions
        .iter()
        .filter_map(|s| s.finished_at.map(|at| (s, at)))
        .collect();

    let days: HashSet<_> = finished.iter().map(|(_, at)| at.date_naive()).collect();

    ProfileStats {
        total_workouts: finished.len() as i64,
        total_volume: saturating_sum(finished.iter().map(|(s, _)| s.total_volume)),
        total_sets: saturating_sum(finished.iter().map(|(s, _)| s.total_sets)),
        days_active: days.len() as i64,
    }
}

/// One point on an exercise progress chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressPoint {
    pub session_id: i64,
    pub date: DateTime<Utc>,
    pub total_volume: i64,
    pub max_weight: i64,
}

/// The `limit` most recent history entries, oldest first.
pub fn progress_points(stats: &ExerciseStats, limit: usize) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = stats
        .history
        .iter()
        .take(limit)
        .map(|h| ProgressPoint {
            session_id: h.session_id,
            date: h.date,
            total_volume: h.total_volume,
            max_weight: h.max_weight,
        })
        .collect();
    points.reverse();
    points
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub total: i64,
    pub achieved: i64,
    pub in_progress: i64,
}

pub fn compute_goal_progress(goals: &[Goal]) -> GoalProgress {
    let achieved = goals.iter().filter(|g| g.achieved).count() as i64;
    GoalProgress {
        total: goals.len() as i64,
        achieved,
        in_progress: goals.len() as i64 - achieved,
    }
}
