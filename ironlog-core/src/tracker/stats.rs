use crate::db::models::PersonalRecord;
use crate::db::operations::{
    get_personal_record_history, get_user_personal_records, get_user_sets_for_exercise,
    get_user_workout_sessions,
};
use crate::stats::{
    ExerciseStats, ProfileStats, ProgressPoint, compute_exercise_stats, compute_profile_stats,
    progress_points,
};
use crate::tracker::Tracker;
use anyhow::Result;
use log::debug;

impl Tracker {
    /// Statistics for one exercise over the user's whole history. An unknown
    /// exercise gives the zeroed result, not an error.
    pub async fn exercise_stats(&self, exercise_id: i64) -> Result<ExerciseStats> {
        let sessions = get_user_workout_sessions(&self.db_pool, self.user.id).await?;
        let sets = get_user_sets_for_exercise(&self.db_pool, self.user.id, exercise_id).await?;
        debug!(
            "exercise_stats: exercise {} across {} sessions, {} sets",
            exercise_id,
            sessions.len(),
            sets.len()
        );
        Ok(compute_exercise_stats(&sessions, &sets, exercise_id))
    }

    /// Current bests, one per (exercise, record type).
    pub async fn personal_records(&self, exercise_id: Option<i64>) -> Result<Vec<PersonalRecord>> {
        get_user_personal_records(&self.db_pool, self.user.id, exercise_id).await
    }

    /// Every detection ever logged, newest first.
    pub async fn personal_record_history(
        &self,
        exercise_id: Option<i64>,
    ) -> Result<Vec<PersonalRecord>> {
        get_personal_record_history(&self.db_pool, self.user.id, exercise_id).await
    }

    pub async fn profile_stats(&self) -> Result<ProfileStats> {
        let sessions = get_user_workout_sessions(&self.db_pool, self.user.id).await?;
        Ok(compute_profile_stats(&sessions))
    }

    pub async fn progress_chart(&self, exercise_id: i64, limit: usize) -> Result<Vec<ProgressPoint>> {
        let stats = self.exercise_stats(exercise_id).await?;
        Ok(progress_points(&stats, limit))
    }
}
