use crate::db::models::{NewWorkoutSet, UpdateWorkoutSet, WorkoutSet};
use crate::db::operations::{
    delete_workout_set, get_max_set_number, get_workout_set, insert_workout_set,
    write_workout_set,
};
use crate::errors::IronlogError;
use crate::tracker::Tracker;
use crate::tracker::records::{refresh_personal_records, refresh_session_totals};
use anyhow::Result;
use chrono::Utc;
use log::{debug, info};

impl Tracker {
    /// Logs a set into an active session.
    ///
    /// The insert, the session totals and the record update commit together;
    /// if any step fails nothing is persisted.
    pub async fn add_set(&self, new_set: &NewWorkoutSet) -> Result<WorkoutSet> {
        new_set.validate()?;

        let mut tx = self.db_pool.begin().await?;
        let session = self.owned_session(&mut *tx, new_set.session_id).await?;
        if !session.is_active() {
            return Err(IronlogError::SessionFinished(session.id).into());
        }
        self.owned_exercise(&mut *tx, new_set.exercise_id).await?;

        let created = insert_workout_set(&mut *tx, new_set, Utc::now()).await?;
        let totals = refresh_session_totals(&mut tx, session.id).await?;
        refresh_personal_records(&mut tx, new_set.exercise_id, session.id).await?;
        tx.commit().await?;

        info!(
            "Logged set {} in session {}: {}kg x {} (session volume {})",
            created.id, session.id, created.weight, created.reps, totals.total_volume
        );
        Ok(created)
    }

    /// The set number the next set of `exercise_id` in the session should get.
    pub async fn next_set_number(&self, session_id: i64, exercise_id: i64) -> Result<i64> {
        self.owned_session(&self.db_pool, session_id).await?;
        let max = get_max_set_number(&self.db_pool, session_id, exercise_id).await?;
        Ok(max.map(|n| n + 1).unwrap_or(1))
    }

    pub async fn update_set(&self, set_id: i64, update: &UpdateWorkoutSet) -> Result<WorkoutSet> {
        let mut tx = self.db_pool.begin().await?;
        let original = get_workout_set(&mut *tx, set_id)
            .await?
            .ok_or(IronlogError::not_found("set", set_id))?;
        self.owned_session(&mut *tx, original.session_id).await?;

        let merged = update.apply(&original)?;
        let updated = write_workout_set(&mut *tx, &merged).await?;
        refresh_session_totals(&mut tx, updated.session_id).await?;
        refresh_personal_records(&mut tx, updated.exercise_id, updated.session_id).await?;
        tx.commit().await?;

        debug!("Updated set {}: {}", set_id, updated);
        Ok(updated)
    }

    /// Deletes a set and recomputes its session's totals. Stored bests are
    /// left alone; the history keeps the row with its set link cleared.
    pub async fn delete_set(&self, set_id: i64) -> Result<u64> {
        let mut tx = self.db_pool.begin().await?;
        let Some(set) = get_workout_set(&mut *tx, set_id).await? else {
            return Ok(0);
        };
        self.owned_session(&mut *tx, set.session_id).await?;

        let removed = delete_workout_set(&mut *tx, set_id).await?;
        refresh_session_totals(&mut tx, set.session_id).await?;
        tx.commit().await?;

        debug!("Deleted set {} from session {}", set_id, set.session_id);
        Ok(removed)
    }
}
