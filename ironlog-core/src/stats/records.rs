use serde::Serialize;
use std::cmp::Reverse;

use crate::db::models::{RecordType, WorkoutSet};

/// The best value of one record type within a session, and the set that set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalBest {
    pub record_type: RecordType,
    pub value: i64,
    pub set_id: i64,
}

fn record_value(set: &WorkoutSet, record_type: RecordType) -> i64 {
    match record_type {
        RecordType::MaxWeight => set.weight,
        RecordType::MaxReps => set.reps,
        RecordType::MaxVolume => set.volume(),
    }
}

/// Finds the max-weight, max-reps and max-volume sets of `exercise_id` in a
/// session's sets. Returns nothing when the exercise has no sets.
///
/// Equal values resolve to the lowest set number, then the lowest set id.
pub fn detect_session_bests(sets: &[WorkoutSet], exercise_id: i64) -> Vec<PersonalBest> {
    let exercise_sets: Vec<&WorkoutSet> = sets
        .iter()
        .filter(|s| s.exercise_id == exercise_id)
        .collect();

    RecordType::ALL
        .iter()
        .filter_map(|&record_type| {
            exercise_sets
                .iter()
                .min_by_key(|s| (Reverse(record_value(s, record_type)), s.set_number, s.id))
                .map(|best| PersonalBest {
                    record_type,
                    value: record_value(best, record_type),
                    set_id: best.id,
                })
        })
        .collect()
}
