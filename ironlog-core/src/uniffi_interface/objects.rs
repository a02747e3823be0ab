//! Plain records handed across the FFI boundary. Timestamps travel as RFC 3339
//! strings.

use chrono::{DateTime, Utc};

use crate::{db, stats};

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group_id: Option<i64>,
    pub equipment_type: Option<String>,
    pub notes: Option<String>,
    pub is_custom: bool,
}

impl From<db::models::Exercise> for Exercise {
    fn from(e: db::models::Exercise) -> Self {
        Exercise {
            id: e.id,
            name: e.name,
            muscle_group_id: e.muscle_group_id,
            equipment_type: e.equipment_type.map(|t| t.as_str().to_string()),
            notes: e.notes,
            is_custom: e.is_custom,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutSession {
    pub id: i64,
    pub routine_id: Option<i64>,
    pub name: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub total_volume: i64,
    pub total_sets: i64,
    pub notes: Option<String>,
}

impl From<db::models::WorkoutSession> for WorkoutSession {
    fn from(s: db::models::WorkoutSession) -> Self {
        WorkoutSession {
            id: s.id,
            routine_id: s.routine_id,
            name: s.name,
            started_at: timestamp(s.started_at),
            finished_at: s.finished_at.map(timestamp),
            total_volume: s.total_volume,
            total_sets: s.total_sets,
            notes: s.notes,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct WorkoutSet {
    pub id: i64,
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_number: i64,
    pub weight: i64,
    pub reps: i64,
    pub rpe: Option<i64>,
    pub is_failure: bool,
    pub rest_seconds: Option<i64>,
    pub created_at: String,
}

impl From<db::models::WorkoutSet> for WorkoutSet {
    fn from(s: db::models::WorkoutSet) -> Self {
        WorkoutSet {
            id: s.id,
            session_id: s.session_id,
            exercise_id: s.exercise_id,
            set_number: s.set_number,
            weight: s.weight,
            reps: s.reps,
            rpe: s.rpe,
            is_failure: s.is_failure,
            rest_seconds: s.rest_seconds,
            created_at: timestamp(s.created_at),
        }
    }
}

/// Input for logging a set. A missing `set_number` means "next in sequence".
#[derive(Debug, Clone, uniffi::Record)]
pub struct AddSetRequest {
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_number: Option<i64>,
    pub weight: i64,
    pub reps: i64,
    pub rpe: Option<i64>,
    pub is_failure: bool,
    pub rest_seconds: Option<i64>,
}

impl AddSetRequest {
    pub(crate) fn into_new_set(self, set_number: i64) -> db::models::NewWorkoutSet {
        db::models::NewWorkoutSet {
            session_id: self.session_id,
            exercise_id: self.exercise_id,
            set_number,
            weight: self.weight,
            reps: self.reps,
            rpe: self.rpe,
            is_failure: self.is_failure,
            rest_seconds: self.rest_seconds,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct HistoryEntry {
    pub session_id: i64,
    pub date: String,
    pub sets: Vec<WorkoutSet>,
    pub total_volume: i64,
    pub max_weight: i64,
}

impl From<stats::SessionHistoryEntry> for HistoryEntry {
    fn from(h: stats::SessionHistoryEntry) -> Self {
        HistoryEntry {
            session_id: h.session_id,
            date: timestamp(h.date),
            sets: h.sets.into_iter().map(WorkoutSet::from).collect(),
            total_volume: h.total_volume,
            max_weight: h.max_weight,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct ExerciseStats {
    pub total_sets: i64,
    pub total_volume: i64,
    pub max_weight: i64,
    pub max_reps: i64,
    pub avg_weight: f64,
    pub avg_reps: f64,
    pub history: Vec<HistoryEntry>,
}

impl From<stats::ExerciseStats> for ExerciseStats {
    fn from(s: stats::ExerciseStats) -> Self {
        ExerciseStats {
            total_sets: s.total_sets,
            total_volume: s.total_volume,
            max_weight: s.max_weight,
            max_reps: s.max_reps,
            avg_weight: s.avg_weight,
            avg_reps: s.avg_reps,
            history: s.history.into_iter().map(HistoryEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PersonalRecord {
    pub id: i64,
    pub exercise_id: i64,
    pub record_type: String,
    pub value: i64,
    pub set_id: Option<i64>,
    pub achieved_at: String,
}

impl From<db::models::PersonalRecord> for PersonalRecord {
    fn from(r: db::models::PersonalRecord) -> Self {
        PersonalRecord {
            id: r.id,
            exercise_id: r.exercise_id,
            record_type: r.record_type.to_string(),
            value: r.value,
            set_id: r.set_id,
            achieved_at: timestamp(r.achieved_at),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PersonalBest {
    pub record_type: String,
    pub value: i64,
    pub set_id: i64,
}

impl From<stats::PersonalBest> for PersonalBest {
    fn from(b: stats::PersonalBest) -> Self {
        PersonalBest {
            record_type: b.record_type.to_string(),
            value: b.value,
            set_id: b.set_id,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct ProfileStats {
    pub total_workouts: i64,
    pub total_volume: i64,
    pub total_sets: i64,
    pub days_active: i64,
}

impl From<stats::ProfileStats> for ProfileStats {
    fn from(p: stats::ProfileStats) -> Self {
        ProfileStats {
            total_workouts: p.total_workouts,
            total_volume: p.total_volume,
            total_sets: p.total_sets,
            days_active: p.days_active,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct ProgressPoint {
    pub session_id: i64,
    pub date: String,
    pub total_volume: i64,
    pub max_weight: i64,
}

impl From<stats::ProgressPoint> for ProgressPoint {
    fn from(p: stats::ProgressPoint) -> Self {
        ProgressPoint {
            session_id: p.session_id,
            date: timestamp(p.date),
            total_volume: p.total_volume,
            max_weight: p.max_weight,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct GoalProgress {
    pub total: i64,
    pub achieved: i64,
    pub in_progress: i64,
}

impl From<stats::GoalProgress> for GoalProgress {
    fn from(g: stats::GoalProgress) -> Self {
        GoalProgress {
            total: g.total,
            achieved: g.achieved,
            in_progress: g.in_progress,
        }
    }
}
