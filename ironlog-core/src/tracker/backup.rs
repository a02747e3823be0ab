use crate::db::models::{Routine, RoutineExercise, WorkoutSession, WorkoutSet};
use crate::db::operations::{
    get_personal_record_history, get_routine_exercises, get_sets_for_session, get_user_exercises,
    get_user_personal_records, get_user_routines, get_user_workout_sessions,
};
use crate::tracker::Tracker;
use anyhow::Result;
use chrono::Utc;
use log::info;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct RoutineExport {
    #[serde(flatten)]
    routine: Routine,
    exercises: Vec<RoutineExercise>,
}

#[derive(Serialize)]
struct SessionExport {
    #[serde(flatten)]
    session: WorkoutSession,
    sets: Vec<WorkoutSet>,
}

impl Tracker {
    /// Everything the user owns, as one JSON document.
    pub async fn export_data(&self) -> Result<Value> {
        let exercises = get_user_exercises(&self.db_pool, self.user.id).await?;

        let mut routines = Vec::new();
        for routine in get_user_routines(&self.db_pool, self.user.id).await? {
            let exercises = get_routine_exercises(&self.db_pool, routine.id).await?;
            routines.push(RoutineExport { routine, exercises });
        }

        let mut sessions = Vec::new();
        for session in get_user_workout_sessions(&self.db_pool, self.user.id).await? {
            let sets = get_sets_for_session(&self.db_pool, session.id).await?;
            sessions.push(SessionExport { session, sets });
        }

        let records = get_user_personal_records(&self.db_pool, self.user.id, None).await?;
        let record_history = get_personal_record_history(&self.db_pool, self.user.id, None).await?;
        let goals = self.goals().await?;

        info!(
            "Exported {} exercises, {} routines, {} sessions",
            exercises.len(),
            routines.len(),
            sessions.len()
        );

        Ok(json!({
            "export_date": Utc::now().to_rfc3339(),
            "user": {
                "id": self.user.id,
                "username": self.user.username,
            },
            "exercises": exercises,
            "routines": routines,
            "workout_sessions": sessions,
            "personal_records": records,
            "personal_record_history": record_history,
            "goals": goals,
        }))
    }
}
