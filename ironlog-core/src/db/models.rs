use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::errors::IronlogError;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// Reference data
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MuscleGroup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EquipmentType {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
    Other,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Barbell => "barbell",
            EquipmentType::Dumbbell => "dumbbell",
            EquipmentType::Machine => "machine",
            EquipmentType::Cable => "cable",
            EquipmentType::Bodyweight => "bodyweight",
            EquipmentType::Other => "other",
        }
    }
}

impl FromStr for EquipmentType {
    type Err = IronlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "barbell" => Ok(EquipmentType::Barbell),
            "dumbbell" => Ok(EquipmentType::Dumbbell),
            "machine" => Ok(EquipmentType::Machine),
            "cable" => Ok(EquipmentType::Cable),
            "bodyweight" => Ok(EquipmentType::Bodyweight),
            "other" => Ok(EquipmentType::Other),
            _ => Err(IronlogError::Invalid(format!("unknown equipment type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub muscle_group_id: Option<i64>,
    pub equipment_type: Option<EquipmentType>,
    pub notes: Option<String>,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group_id: Option<i64>,
    pub equipment_type: Option<EquipmentType>,
    pub notes: Option<String>,
    pub is_custom: bool,
}

impl NewExercise {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            muscle_group_id: None,
            equipment_type: None,
            notes: None,
            is_custom: true,
        }
    }
}

/// Partial exercise edit. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default)]
pub struct UpdateExercise {
    pub name: Option<String>,
    pub muscle_group_id: Option<Option<i64>>,
    pub equipment_type: Option<Option<EquipmentType>>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Routine {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial routine edit. `description: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoutine {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoutineExercise {
    pub id: i64,
    pub routine_id: i64,
    pub exercise_id: i64,
    pub order_index: i64,
    pub target_sets: i64,
    pub target_reps: i64,
    pub rest_seconds: i64,
}

#[derive(Debug, Clone)]
pub struct NewRoutineExercise {
    pub routine_id: i64,
    pub exercise_id: i64,
    pub order_index: i64,
    pub target_sets: Option<i64>,
    pub target_reps: Option<i64>,
    pub rest_seconds: Option<i64>,
}

// Session models
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: i64,
    pub routine_id: Option<i64>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub total_volume: i64,
    pub total_sets: i64,
    pub notes: Option<String>,
}

impl WorkoutSession {
    pub fn is_active(&self) -> bool {
        self.finished_at.is_none()
    }
}

// Set models
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
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
    pub created_at: DateTime<Utc>,
}

impl WorkoutSet {
    /// Weight times reps. Saturates instead of overflowing; validated sets
    /// never get near the limit.
    pub fn volume(&self) -> i64 {
        self.weight.saturating_mul(self.reps)
    }
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rpe_str = self.rpe.map(|r| format!(" @{}", r)).unwrap_or_default();
        let failure_str = if self.is_failure { " (failure)" } else { "" };

        write!(
            f,
            "#{} exercise {}: {}kg x {} reps{}{}",
            self.set_number, self.exercise_id, self.weight, self.reps, rpe_str, failure_str
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewWorkoutSet {
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_number: i64,
    pub weight: i64,
    pub reps: i64,
    pub rpe: Option<i64>,
    pub is_failure: bool,
    pub rest_seconds: Option<i64>,
}

impl NewWorkoutSet {
    pub fn new(session_id: i64, exercise_id: i64, set_number: i64, weight: i64, reps: i64) -> Self {
        Self {
            session_id,
            exercise_id,
            set_number,
            weight,
            reps,
            rpe: None,
            is_failure: false,
            rest_seconds: None,
        }
    }

    pub fn validate(&self) -> Result<(), IronlogError> {
        if self.set_number < 1 {
            return Err(IronlogError::Invalid(format!(
                "set number must be positive, got {}",
                self.set_number
            )));
        }
        validate_load(self.weight, self.reps)?;
        validate_rpe(self.rpe)?;
        validate_rest(self.rest_seconds)
    }
}

/// Partial set edit. Identity fields (session, exercise, set number) are immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutSet {
    pub weight: Option<i64>,
    pub reps: Option<i64>,
    pub rpe: Option<Option<i64>>,
    pub is_failure: Option<bool>,
    pub rest_seconds: Option<Option<i64>>,
}

impl UpdateWorkoutSet {
    /// Merges the edit onto `original`, validating the result.
    pub fn apply(&self, original: &WorkoutSet) -> Result<WorkoutSet, IronlogError> {
        let merged = WorkoutSet {
            weight: self.weight.unwrap_or(original.weight),
            reps: self.reps.unwrap_or(original.reps),
            rpe: self.rpe.unwrap_or(original.rpe),
            is_failure: self.is_failure.unwrap_or(original.is_failure),
            rest_seconds: self.rest_seconds.unwrap_or(original.rest_seconds),
            ..original.clone()
        };
        validate_load(merged.weight, merged.reps)?;
        validate_rpe(merged.rpe)?;
        validate_rest(merged.rest_seconds)?;
        Ok(merged)
    }
}

/// Largest accepted weight (kg) or rep count. Keeps one set's volume within i64.
pub const MAX_LOAD: i64 = i32::MAX as i64;

fn validate_load(weight: i64, reps: i64) -> Result<(), IronlogError> {
    if !(1..=MAX_LOAD).contains(&weight) {
        return Err(IronlogError::Invalid(format!(
            "weight must be between 1 and {MAX_LOAD} kg, got {weight}"
        )));
    }
    if !(1..=MAX_LOAD).contains(&reps) {
        return Err(IronlogError::Invalid(format!(
            "reps must be between 1 and {MAX_LOAD}, got {reps}"
        )));
    }
    Ok(())
}

fn validate_rpe(rpe: Option<i64>) -> Result<(), IronlogError> {
    match rpe {
        Some(r) if !(1..=10).contains(&r) => Err(IronlogError::Invalid(format!(
            "rpe must be between 1 and 10, got {r}"
        ))),
        _ => Ok(()),
    }
}

fn validate_rest(rest_seconds: Option<i64>) -> Result<(), IronlogError> {
    match rest_seconds {
        Some(r) if r < 0 => Err(IronlogError::Invalid(format!(
            "rest seconds cannot be negative, got {r}"
        ))),
        _ => Ok(()),
    }
}

// Personal record models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RecordType {
    MaxWeight,
    MaxReps,
    MaxVolume,
}

impl RecordType {
    pub const ALL: [RecordType; 3] = [
        RecordType::MaxWeight,
        RecordType::MaxReps,
        RecordType::MaxVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::MaxWeight => "max_weight",
            RecordType::MaxReps => "max_reps",
            RecordType::MaxVolume => "max_volume",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = IronlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max_weight" => Ok(RecordType::MaxWeight),
            "max_reps" => Ok(RecordType::MaxReps),
            "max_volume" => Ok(RecordType::MaxVolume),
            _ => Err(IronlogError::Invalid(format!("unknown record type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonalRecord {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: i64,
    pub record_type: RecordType,
    pub value: i64,
    pub set_id: Option<i64>,
    pub achieved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPersonalRecord {
    pub user_id: i64,
    pub exercise_id: i64,
    pub record_type: RecordType,
    pub value: i64,
    pub set_id: i64,
    pub achieved_at: DateTime<Utc>,
}

// Goal models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum GoalType {
    Weight,
    Reps,
    Volume,
    Frequency,
}

impl FromStr for GoalType {
    type Err = IronlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(GoalType::Weight),
            "reps" => Ok(GoalType::Reps),
            "volume" => Ok(GoalType::Volume),
            "frequency" => Ok(GoalType::Frequency),
            _ => Err(IronlogError::Invalid(format!("unknown goal type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: Option<i64>,
    pub goal_type: GoalType,
    pub target_value: i64,
    pub current_value: i64,
    pub deadline: Option<DateTime<Utc>>,
    pub achieved: bool,
    pub achieved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub exercise_id: Option<i64>,
    pub goal_type: GoalType,
    pub target_value: i64,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGoal {
    pub target_value: Option<i64>,
    pub current_value: Option<i64>,
    pub deadline: Option<Option<DateTime<Utc>>>,
    pub achieved: Option<bool>,
}
