//! Exercises, muscle groups and routines.

use crate::db::models::{
    Exercise, MuscleGroup, NewExercise, NewRoutineExercise, Routine, RoutineExercise,
    UpdateExercise, UpdateRoutine,
};
use crate::db::operations::{
    DEFAULT_EXERCISES, add_routine_exercise, create_exercise, create_routine, delete_exercise,
    delete_routine, get_all_muscle_groups, get_routine, get_routine_exercise,
    get_routine_exercises, get_user_exercises, get_user_routines, insert_default_exercise,
    remove_routine_exercise, seed_muscle_groups, write_exercise, write_routine,
};
use crate::errors::IronlogError;
use crate::tracker::Tracker;
use crate::tracker::tracker::require_name;
use anyhow::Result;
use log::info;
use sqlx::SqliteExecutor;

impl Tracker {
    pub async fn muscle_groups(&self) -> Result<Vec<MuscleGroup>> {
        get_all_muscle_groups(&self.db_pool).await
    }

    /// Inserts the default muscle groups that are not there yet.
    pub async fn seed_muscle_groups(&self) -> Result<u64> {
        let inserted = seed_muscle_groups(&self.db_pool).await?;
        if inserted > 0 {
            info!("Seeded {} muscle groups", inserted);
        }
        Ok(inserted)
    }

    /// Adds the stock exercise library (and the muscle groups it refers to)
    /// for this user. Names the user already has are skipped.
    pub async fn seed_default_exercises(&self) -> Result<u64> {
        self.seed_muscle_groups().await?;

        let mut tx = self.db_pool.begin().await?;
        let mut inserted = 0;
        for (name, muscle_group, equipment_type) in DEFAULT_EXERCISES {
            if insert_default_exercise(&mut *tx, self.user.id, name, muscle_group, equipment_type)
                .await?
            {
                inserted += 1;
            }
        }
        tx.commit().await?;

        if inserted > 0 {
            info!("Seeded {} default exercises for {}", inserted, self.user.username);
        }
        Ok(inserted)
    }

    pub async fn exercises(&self) -> Result<Vec<Exercise>> {
        get_user_exercises(&self.db_pool, self.user.id).await
    }

    pub async fn get_exercise(&self, exercise_id: i64) -> Result<Exercise> {
        self.owned_exercise(&self.db_pool, exercise_id).await
    }

    pub async fn create_exercise(&self, exercise: &NewExercise) -> Result<Exercise> {
        require_name(&exercise.name, "exercise")?;
        create_exercise(&self.db_pool, self.user.id, exercise).await
    }

    pub async fn update_exercise(&self, exercise_id: i64, update: &UpdateExercise) -> Result<Exercise> {
        let original = self.owned_exercise(&self.db_pool, exercise_id).await?;
        if let Some(name) = &update.name {
            require_name(name, "exercise")?;
        }

        let merged = Exercise {
            name: update
                .name
                .as_deref()
                .map(str::trim)
                .map(String::from)
                .unwrap_or(original.name.clone()),
            muscle_group_id: update.muscle_group_id.unwrap_or(original.muscle_group_id),
            equipment_type: update.equipment_type.unwrap_or(original.equipment_type),
            notes: update.notes.clone().unwrap_or(original.notes.clone()),
            ..original
        };
        write_exercise(&self.db_pool, &merged).await
    }

    /// Deletes an exercise along with every set and record logged against it.
    pub async fn delete_exercise(&self, exercise_id: i64) -> Result<u64> {
        self.owned_exercise(&self.db_pool, exercise_id).await?;
        delete_exercise(&self.db_pool, exercise_id).await
    }

    pub async fn routines(&self) -> Result<Vec<Routine>> {
        get_user_routines(&self.db_pool, self.user.id).await
    }

    pub async fn create_routine(&self, name: &str, description: Option<&str>) -> Result<Routine> {
        require_name(name, "routine")?;
        create_routine(&self.db_pool, self.user.id, name, description).await
    }

    pub async fn update_routine(&self, routine_id: i64, update: &UpdateRoutine) -> Result<Routine> {
        let original = self.owned_routine(&self.db_pool, routine_id).await?;
        if let Some(name) = &update.name {
            require_name(name, "routine")?;
        }

        let merged = Routine {
            name: update
                .name
                .as_deref()
                .map(str::trim)
                .map(String::from)
                .unwrap_or(original.name.clone()),
            description: update.description.clone().unwrap_or(original.description.clone()),
            ..original
        };
        write_routine(&self.db_pool, &merged).await
    }

    /// Copies a routine and its exercise entries under "<name> (copy)".
    pub async fn duplicate_routine(&self, routine_id: i64) -> Result<Routine> {
        let mut tx = self.db_pool.begin().await?;
        let original = self.owned_routine(&mut *tx, routine_id).await?;

        let name = format!("{} (copy)", original.name);
        let copy =
            create_routine(&mut *tx, self.user.id, &name, original.description.as_deref()).await?;
        for entry in get_routine_exercises(&mut *tx, routine_id).await? {
            add_routine_exercise(
                &mut *tx,
                &NewRoutineExercise {
                    routine_id: copy.id,
                    exercise_id: entry.exercise_id,
                    order_index: entry.order_index,
                    target_sets: Some(entry.target_sets),
                    target_reps: Some(entry.target_reps),
                    rest_seconds: Some(entry.rest_seconds),
                },
            )
            .await?;
        }
        tx.commit().await?;

        info!("Duplicated routine {} as {}", routine_id, copy.id);
        Ok(copy)
    }

    pub async fn delete_routine(&self, routine_id: i64) -> Result<u64> {
        self.owned_routine(&self.db_pool, routine_id).await?;
        delete_routine(&self.db_pool, routine_id).await
    }

    pub async fn routine_exercises(&self, routine_id: i64) -> Result<Vec<RoutineExercise>> {
        self.owned_routine(&self.db_pool, routine_id).await?;
        get_routine_exercises(&self.db_pool, routine_id).await
    }

    pub async fn add_routine_exercise(&self, entry: &NewRoutineExercise) -> Result<RoutineExercise> {
        self.owned_routine(&self.db_pool, entry.routine_id).await?;
        self.owned_exercise(&self.db_pool, entry.exercise_id).await?;
        for (value, what) in [
            (entry.target_sets, "target sets"),
            (entry.target_reps, "target reps"),
        ] {
            if matches!(value, Some(v) if v < 1) {
                return Err(IronlogError::Invalid(format!("{what} must be positive")).into());
            }
        }
        add_routine_exercise(&self.db_pool, entry).await
    }

    pub async fn remove_routine_exercise(&self, id: i64) -> Result<u64> {
        let Some(entry) = get_routine_exercise(&self.db_pool, id).await? else {
            return Ok(0);
        };
        self.owned_routine(&self.db_pool, entry.routine_id).await?;
        remove_routine_exercise(&self.db_pool, id).await
    }

    async fn owned_routine<'e, E>(&self, executor: E, routine_id: i64) -> Result<Routine>
    where
        E: SqliteExecutor<'e>,
    {
        match get_routine(executor, routine_id).await? {
            Some(routine) if routine.user_id == self.user.id => Ok(routine),
            _ => Err(IronlogError::not_found("routine", routine_id).into()),
        }
    }
}
