//! Workout session lifecycle.

use crate::db::models::{WorkoutSession, WorkoutSet};
use crate::db::operations::{
    create_workout_session, delete_workout_session, finish_workout_session,
    get_active_workout_session, get_routine, get_sets_for_session, get_user_workout_sessions,
};
use crate::errors::IronlogError;
use crate::tracker::Tracker;
use crate::tracker::tracker::require_name;
use anyhow::Result;
use chrono::Utc;
use log::info;

impl Tracker {
    /// Starts a session. A user can only have one unfinished session.
    pub async fn start_workout(&self, name: &str, routine_id: Option<i64>) -> Result<WorkoutSession> {
        require_name(name, "workout")?;

        let mut tx = self.db_pool.begin().await?;
        if let Some(active) = get_active_workout_session(&mut *tx, self.user.id).await? {
            return Err(IronlogError::ActiveSessionExists(active.id).into());
        }
        if let Some(routine_id) = routine_id {
            match get_routine(&mut *tx, routine_id).await? {
                Some(routine) if routine.user_id == self.user.id => {}
                _ => return Err(IronlogError::not_found("routine", routine_id).into()),
            }
        }

        let session =
            create_workout_session(&mut *tx, self.user.id, routine_id, name, Utc::now()).await?;
        tx.commit().await?;

        info!("Started workout {} ({})", session.id, session.name);
        Ok(session)
    }

    /// The user's unfinished session, if any.
    pub async fn active_workout(&self) -> Result<Option<WorkoutSession>> {
        get_active_workout_session(&self.db_pool, self.user.id).await
    }

    pub async fn get_workout(&self, session_id: i64) -> Result<WorkoutSession> {
        self.owned_session(&self.db_pool, session_id).await
    }

    /// Closes a session. Finished sessions stay finished.
    pub async fn finish_workout(&self, session_id: i64) -> Result<WorkoutSession> {
        let mut tx = self.db_pool.begin().await?;
        let session = self.owned_session(&mut *tx, session_id).await?;
        if !session.is_active() {
            return Err(IronlogError::SessionFinished(session_id).into());
        }
        let finished = finish_workout_session(&mut *tx, session_id, Utc::now()).await?;
        tx.commit().await?;

        info!(
            "Finished workout {}: {} sets, {}kg volume",
            finished.id, finished.total_sets, finished.total_volume
        );
        Ok(finished)
    }

    /// Every session of the user, most recently started first.
    pub async fn workout_history(&self) -> Result<Vec<WorkoutSession>> {
        get_user_workout_sessions(&self.db_pool, self.user.id).await
    }

    pub async fn session_sets(&self, session_id: i64) -> Result<Vec<WorkoutSet>> {
        self.owned_session(&self.db_pool, session_id).await?;
        get_sets_for_session(&self.db_pool, session_id).await
    }

    /// Deletes a session together with its sets.
    pub async fn delete_workout(&self, session_id: i64) -> Result<u64> {
        self.owned_session(&self.db_pool, session_id).await?;
        delete_workout_session(&self.db_pool, session_id).await
    }
}
