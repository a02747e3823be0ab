use std::sync::Arc;

use log::debug;

use crate::db;
use crate::db::models::NewExercise;
use crate::tracker::Tracker;
use crate::uniffi_interface::errors::IronlogFfiError;
use crate::uniffi_interface::objects::{
    AddSetRequest, Exercise, ExerciseStats, GoalProgress, PersonalBest, PersonalRecord,
    ProfileStats, ProgressPoint, WorkoutSession, WorkoutSet,
};

type FfiResult<T> = std::result::Result<T, IronlogFfiError>;

/// A [`Tracker`] shared with the foreign side.
#[derive(uniffi::Object)]
pub struct TrackerHandle {
    tracker: Tracker,
}

impl From<Tracker> for TrackerHandle {
    fn from(tracker: Tracker) -> Self {
        TrackerHandle { tracker }
    }
}

#[uniffi::export(async_runtime = "tokio")]
pub async fn open_tracker(db_path: String, username: String) -> FfiResult<Arc<TrackerHandle>> {
    let tracker = Tracker::new(&db_path, &username).await?;
    Ok(Arc::new(tracker.into()))
}

/// Opens the database registered with `setup_database` (or `DATABASE_URL`).
#[uniffi::export(async_runtime = "tokio")]
pub async fn open_default_tracker(username: String) -> FfiResult<Arc<TrackerHandle>> {
    let db_path = db::get_db_path().await?;
    let tracker = Tracker::new(db_path, &username).await?;
    Ok(Arc::new(tracker.into()))
}

#[uniffi::export(async_runtime = "tokio")]
impl TrackerHandle {
    pub fn user_id(&self) -> i64 {
        self.tracker.user_id()
    }

    pub async fn exercise_stats(&self, exercise_id: i64) -> FfiResult<ExerciseStats> {
        Ok(self.tracker.exercise_stats(exercise_id).await?.into())
    }

    pub async fn personal_records(&self, exercise_id: Option<i64>) -> FfiResult<Vec<PersonalRecord>> {
        let records = self.tracker.personal_records(exercise_id).await?;
        Ok(records.into_iter().map(PersonalRecord::from).collect())
    }

    pub async fn personal_record_history(
        &self,
        exercise_id: Option<i64>,
    ) -> FfiResult<Vec<PersonalRecord>> {
        let records = self.tracker.personal_record_history(exercise_id).await?;
        Ok(records.into_iter().map(PersonalRecord::from).collect())
    }

    pub async fn profile_stats(&self) -> FfiResult<ProfileStats> {
        Ok(self.tracker.profile_stats().await?.into())
    }

    pub async fn progress_chart(&self, exercise_id: i64, limit: u32) -> FfiResult<Vec<ProgressPoint>> {
        let points = self.tracker.progress_chart(exercise_id, limit as usize).await?;
        Ok(points.into_iter().map(ProgressPoint::from).collect())
    }

    pub async fn goal_progress(&self) -> FfiResult<GoalProgress> {
        Ok(self.tracker.goal_progress().await?.into())
    }

    pub async fn add_set(&self, request: AddSetRequest) -> FfiResult<WorkoutSet> {
        let set_number = match request.set_number {
            Some(n) => n,
            None => {
                self.tracker
                    .next_set_number(request.session_id, request.exercise_id)
                    .await?
            }
        };
        debug!(
            "add_set over ffi: session {} exercise {} set {}",
            request.session_id, request.exercise_id, set_number
        );
        let created = self.tracker.add_set(&request.into_new_set(set_number)).await?;
        Ok(created.into())
    }

    pub async fn delete_set(&self, set_id: i64) -> FfiResult<u64> {
        Ok(self.tracker.delete_set(set_id).await?)
    }

    pub async fn update_personal_records(
        &self,
        exercise_id: i64,
        session_id: i64,
    ) -> FfiResult<Vec<PersonalBest>> {
        let bests = self
            .tracker
            .update_personal_records(exercise_id, session_id)
            .await?;
        Ok(bests.into_iter().map(PersonalBest::from).collect())
    }

    pub async fn start_workout(&self, name: String, routine_id: Option<i64>) -> FfiResult<WorkoutSession> {
        Ok(self.tracker.start_workout(&name, routine_id).await?.into())
    }

    pub async fn active_workout(&self) -> FfiResult<Option<WorkoutSession>> {
        Ok(self.tracker.active_workout().await?.map(WorkoutSession::from))
    }

    pub async fn finish_workout(&self, session_id: i64) -> FfiResult<WorkoutSession> {
        Ok(self.tracker.finish_workout(session_id).await?.into())
    }

    pub async fn workout_history(&self) -> FfiResult<Vec<WorkoutSession>> {
        let sessions = self.tracker.workout_history().await?;
        Ok(sessions.into_iter().map(WorkoutSession::from).collect())
    }

    pub async fn session_sets(&self, session_id: i64) -> FfiResult<Vec<WorkoutSet>> {
        let sets = self.tracker.session_sets(session_id).await?;
        Ok(sets.into_iter().map(WorkoutSet::from).collect())
    }

    pub async fn exercises(&self) -> FfiResult<Vec<Exercise>> {
        let exercises = self.tracker.exercises().await?;
        Ok(exercises.into_iter().map(Exercise::from).collect())
    }

    /// Adds the stock exercise library; returns how many exercises were new.
    pub async fn seed_default_exercises(&self) -> FfiResult<u64> {
        Ok(self.tracker.seed_default_exercises().await?)
    }

    pub async fn create_exercise(&self, name: String) -> FfiResult<Exercise> {
        Ok(self.tracker.create_exercise(&NewExercise::named(&name)).await?.into())
    }

    /// The full user export as a JSON string.
    pub async fn export_json(&self) -> FfiResult<String> {
        let export = self.tracker.export_data().await?;
        serde_json::to_string_pretty(&export).map_err(|e| IronlogFfiError::Common(e.to_string()))
    }
}
