use serde::Serialize;

use crate::db::models::WorkoutSet;
use crate::errors::IronlogError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionTotals {
    pub total_volume: i64,
    pub total_sets: i64,
}

/// Full recompute over a session's sets; there is no incremental path.
///
/// Fails with `Invalid` when the volume no longer fits in an `i64`.
pub fn session_totals(sets: &[WorkoutSet]) -> Result<SessionTotals, IronlogError> {
    let total_volume = sets
        .iter()
        .try_fold(0i64, |acc, set| {
            set.weight
                .checked_mul(set.reps)
                .and_then(|volume| acc.checked_add(volume))
        })
        .ok_or_else(|| IronlogError::Invalid("session volume is too large to store".into()))?;

    Ok(SessionTotals {
        total_volume,
        total_sets: sets.len() as i64,
    })
}
