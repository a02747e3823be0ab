use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::db::models::{
    EquipmentType, Exercise, Goal, MuscleGroup, NewExercise, NewGoal, NewPersonalRecord, NewRoutineExercise,
    NewWorkoutSet, PersonalRecord, Routine, RoutineExercise, User, WorkoutSession, WorkoutSet,
};
use crate::stats::SessionTotals;

pub const DEFAULT_MUSCLE_GROUPS: [&str; 8] = [
    "Chest",
    "Back",
    "Shoulders",
    "Biceps",
    "Triceps",
    "Legs",
    "Abs",
    "Glutes",
];

/// The stock exercise library: (name, muscle group, equipment).
pub const DEFAULT_EXERCISES: [(&str, &str, EquipmentType); 39] = [
    ("Bench Press", "Chest", EquipmentType::Barbell),
    ("Incline Bench Press", "Chest", EquipmentType::Barbell),
    ("Decline Bench Press", "Chest", EquipmentType::Barbell),
    ("Dumbbell Bench Press", "Chest", EquipmentType::Dumbbell),
    ("Dumbbell Fly", "Chest", EquipmentType::Dumbbell),
    ("Cable Crossover", "Chest", EquipmentType::Cable),
    ("Push-up", "Chest", EquipmentType::Bodyweight),
    ("Pull-up", "Back", EquipmentType::Bodyweight),
    ("Bent-over Row", "Back", EquipmentType::Barbell),
    ("T-bar Row", "Back", EquipmentType::Machine),
    ("Lat Pulldown", "Back", EquipmentType::Cable),
    ("One-arm Dumbbell Row", "Back", EquipmentType::Dumbbell),
    ("Deadlift", "Back", EquipmentType::Barbell),
    ("Overhead Press", "Shoulders", EquipmentType::Barbell),
    ("Dumbbell Shoulder Press", "Shoulders", EquipmentType::Dumbbell),
    ("Lateral Raise", "Shoulders", EquipmentType::Dumbbell),
    ("Front Raise", "Shoulders", EquipmentType::Dumbbell),
    ("Upright Row", "Shoulders", EquipmentType::Barbell),
    ("Barbell Curl", "Biceps", EquipmentType::Barbell),
    ("Alternating Dumbbell Curl", "Biceps", EquipmentType::Dumbbell),
    ("Hammer Curl", "Biceps", EquipmentType::Dumbbell),
    ("Preacher Curl", "Biceps", EquipmentType::Barbell),
    ("Concentration Curl", "Biceps", EquipmentType::Dumbbell),
    ("Skull Crusher", "Triceps", EquipmentType::Barbell),
    ("Overhead Triceps Extension", "Triceps", EquipmentType::Dumbbell),
    ("Rope Pushdown", "Triceps", EquipmentType::Cable),
    ("Dip", "Triceps", EquipmentType::Bodyweight),
    ("Back Squat", "Legs", EquipmentType::Barbell),
    ("Leg Press", "Legs", EquipmentType::Machine),
    ("Leg Extension", "Legs", EquipmentType::Machine),
    ("Leg Curl", "Legs", EquipmentType::Machine),
    ("Stiff-leg Deadlift", "Legs", EquipmentType::Barbell),
    ("Lunge", "Legs", EquipmentType::Dumbbell),
    ("Standing Calf Raise", "Legs", EquipmentType::Machine),
    ("Hip Thrust", "Glutes", EquipmentType::Barbell),
    ("Hip Abduction", "Glutes", EquipmentType::Machine),
    ("Crunch", "Abs", EquipmentType::Bodyweight),
    ("Reverse Crunch", "Abs", EquipmentType::Bodyweight),
    ("Plank", "Abs", EquipmentType::Bodyweight),
];

// Users
pub async fn get_or_create_user(pool: &SqlitePool, username: &str) -> Result<User> {
    sqlx::query("INSERT INTO users (username, created_at) VALUES (?1, ?2) ON CONFLICT(username) DO NOTHING")
        .bind(username)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
        .bind(username)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
}

// Muscle groups
pub async fn seed_muscle_groups(pool: &SqlitePool) -> Result<u64> {
    let mut inserted = 0;
    for name in DEFAULT_MUSCLE_GROUPS {
        inserted += sqlx::query("INSERT OR IGNORE INTO muscle_groups (name) VALUES (?1)")
            .bind(name)
            .execute(pool)
            .await?
            .rows_affected();
    }
    Ok(inserted)
}

pub async fn get_all_muscle_groups<'e, E>(executor: E) -> Result<Vec<MuscleGroup>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, MuscleGroup>("SELECT * FROM muscle_groups ORDER BY id")
        .fetch_all(executor)
        .await
        .map_err(Into::into)
}

// Exercises
/// Inserts one stock (non-custom) exercise for the user unless an exercise
/// with that name already exists. Returns whether a row was added.
pub async fn insert_default_exercise<'e, E>(
    executor: E,
    user_id: i64,
    name: &str,
    muscle_group: &str,
    equipment_type: EquipmentType,
) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO exercises (user_id, name, muscle_group_id, equipment_type, notes, is_custom, created_at)
         SELECT ?1, ?2, (SELECT id FROM muscle_groups WHERE name = ?3), ?4, NULL, 0, ?5
         WHERE NOT EXISTS (SELECT 1 FROM exercises WHERE user_id = ?1 AND name = ?2)",
    )
    .bind(user_id)
    .bind(name)
    .bind(muscle_group)
    .bind(equipment_type)
    .bind(Utc::now())
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn create_exercise<'e, E>(
    executor: E,
    user_id: i64,
    exercise: &NewExercise,
) -> Result<Exercise>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Exercise>(
        "INSERT INTO exercises (user_id, name, muscle_group_id, equipment_type, notes, is_custom, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         RETURNING *",
    )
    .bind(user_id)
    .bind(exercise.name.trim())
    .bind(exercise.muscle_group_id)
    .bind(exercise.equipment_type)
    .bind(&exercise.notes)
    .bind(exercise.is_custom)
    .bind(Utc::now())
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_exercise<'e, E>(executor: E, exercise_id: i64) -> Result<Option<Exercise>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE id = ?1")
        .bind(exercise_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

pub async fn get_user_exercises<'e, E>(executor: E, user_id: i64) -> Result<Vec<Exercise>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE user_id = ?1 ORDER BY name, id")
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
}

/// Writes every mutable column of `exercise` back to its row.
pub async fn write_exercise<'e, E>(executor: E, exercise: &Exercise) -> Result<Exercise>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Exercise>(
        "UPDATE exercises SET name = ?1, muscle_group_id = ?2, equipment_type = ?3, notes = ?4
         WHERE id = ?5
         RETURNING *",
    )
    .bind(&exercise.name)
    .bind(exercise.muscle_group_id)
    .bind(exercise.equipment_type)
    .bind(&exercise.notes)
    .bind(exercise.id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn delete_exercise<'e, E>(executor: E, exercise_id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM exercises WHERE id = ?1")
        .bind(exercise_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

// Routines
pub async fn create_routine<'e, E>(
    executor: E,
    user_id: i64,
    name: &str,
    description: Option<&str>,
) -> Result<Routine>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Routine>(
        "INSERT INTO routines (user_id, name, description, created_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *",
    )
    .bind(user_id)
    .bind(name.trim())
    .bind(description)
    .bind(Utc::now())
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_routine<'e, E>(executor: E, routine_id: i64) -> Result<Option<Routine>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Routine>("SELECT * FROM routines WHERE id = ?1")
        .bind(routine_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

pub async fn get_user_routines<'e, E>(executor: E, user_id: i64) -> Result<Vec<Routine>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Routine>("SELECT * FROM routines WHERE user_id = ?1 ORDER BY name, id")
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
}

/// Writes the name and description of `routine` back to its row.
pub async fn write_routine<'e, E>(executor: E, routine: &Routine) -> Result<Routine>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Routine>(
        "UPDATE routines SET name = ?1, description = ?2 WHERE id = ?3 RETURNING *",
    )
    .bind(&routine.name)
    .bind(&routine.description)
    .bind(routine.id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn delete_routine<'e, E>(executor: E, routine_id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM routines WHERE id = ?1")
        .bind(routine_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn get_routine_exercises<'e, E>(executor: E, routine_id: i64) -> Result<Vec<RoutineExercise>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, RoutineExercise>(
        "SELECT * FROM routine_exercises WHERE routine_id = ?1 ORDER BY order_index, id",
    )
    .bind(routine_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_routine_exercise<'e, E>(executor: E, id: i64) -> Result<Option<RoutineExercise>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, RoutineExercise>("SELECT * FROM routine_exercises WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

pub async fn add_routine_exercise<'e, E>(
    executor: E,
    entry: &NewRoutineExercise,
) -> Result<RoutineExercise>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, RoutineExercise>(
        "INSERT INTO routine_exercises (routine_id, exercise_id, order_index, target_sets, target_reps, rest_seconds)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING *",
    )
    .bind(entry.routine_id)
    .bind(entry.exercise_id)
    .bind(entry.order_index)
    .bind(entry.target_sets.unwrap_or(3))
    .bind(entry.target_reps.unwrap_or(10))
    .bind(entry.rest_seconds.unwrap_or(90))
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn remove_routine_exercise<'e, E>(executor: E, id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM routine_exercises WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

// Workout sessions
pub async fn create_workout_session<'e, E>(
    executor: E,
    user_id: i64,
    routine_id: Option<i64>,
    name: &str,
    started_at: DateTime<Utc>,
) -> Result<WorkoutSession>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSession>(
        "INSERT INTO workout_sessions (user_id, routine_id, name, started_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *",
    )
    .bind(user_id)
    .bind(routine_id)
    .bind(name.trim())
    .bind(started_at)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_workout_session<'e, E>(executor: E, session_id: i64) -> Result<Option<WorkoutSession>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSession>("SELECT * FROM workout_sessions WHERE id = ?1")
        .bind(session_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

/// All sessions of a user, most recently started first.
pub async fn get_user_workout_sessions<'e, E>(executor: E, user_id: i64) -> Result<Vec<WorkoutSession>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSession>(
        "SELECT * FROM workout_sessions WHERE user_id = ?1 ORDER BY started_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_active_workout_session<'e, E>(
    executor: E,
    user_id: i64,
) -> Result<Option<WorkoutSession>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSession>(
        "SELECT * FROM workout_sessions WHERE user_id = ?1 AND finished_at IS NULL LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
    .map_err(Into::into)
}

pub async fn finish_workout_session<'e, E>(
    executor: E,
    session_id: i64,
    finished_at: DateTime<Utc>,
) -> Result<WorkoutSession>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSession>(
        "UPDATE workout_sessions SET finished_at = ?1 WHERE id = ?2 RETURNING *",
    )
    .bind(finished_at)
    .bind(session_id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn update_session_totals<'e, E>(
    executor: E,
    session_id: i64,
    totals: &SessionTotals,
) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result =
        sqlx::query("UPDATE workout_sessions SET total_volume = ?1, total_sets = ?2 WHERE id = ?3")
            .bind(totals.total_volume)
            .bind(totals.total_sets)
            .bind(session_id)
            .execute(executor)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete_workout_session<'e, E>(executor: E, session_id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM workout_sessions WHERE id = ?1")
        .bind(session_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

// Sets
pub async fn insert_workout_set<'e, E>(
    executor: E,
    set: &NewWorkoutSet,
    created_at: DateTime<Utc>,
) -> Result<WorkoutSet>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSet>(
        "INSERT INTO workout_sets (session_id, exercise_id, set_number, weight, reps, rpe, is_failure, rest_seconds, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         RETURNING *",
    )
    .bind(set.session_id)
    .bind(set.exercise_id)
    .bind(set.set_number)
    .bind(set.weight)
    .bind(set.reps)
    .bind(set.rpe)
    .bind(set.is_failure)
    .bind(set.rest_seconds)
    .bind(created_at)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_workout_set<'e, E>(executor: E, set_id: i64) -> Result<Option<WorkoutSet>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSet>("SELECT * FROM workout_sets WHERE id = ?1")
        .bind(set_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

pub async fn get_sets_for_session<'e, E>(executor: E, session_id: i64) -> Result<Vec<WorkoutSet>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSet>(
        "SELECT * FROM workout_sets WHERE session_id = ?1 ORDER BY set_number, id",
    )
    .bind(session_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

/// Highest set number logged for `exercise_id` in a session, if any.
pub async fn get_max_set_number<'e, E>(
    executor: E,
    session_id: i64,
    exercise_id: i64,
) -> Result<Option<i64>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(set_number) FROM workout_sets WHERE session_id = ?1 AND exercise_id = ?2",
    )
    .bind(session_id)
    .bind(exercise_id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

/// Every set of one exercise across all of a user's sessions.
pub async fn get_user_sets_for_exercise<'e, E>(
    executor: E,
    user_id: i64,
    exercise_id: i64,
) -> Result<Vec<WorkoutSet>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSet>(
        "SELECT s.* FROM workout_sets s
         JOIN workout_sessions w ON w.id = s.session_id
         WHERE w.user_id = ?1 AND s.exercise_id = ?2
         ORDER BY s.session_id, s.set_number, s.id",
    )
    .bind(user_id)
    .bind(exercise_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

/// Writes the mutable columns of `set` back to its row.
pub async fn write_workout_set<'e, E>(executor: E, set: &WorkoutSet) -> Result<WorkoutSet>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, WorkoutSet>(
        "UPDATE workout_sets SET weight = ?1, reps = ?2, rpe = ?3, is_failure = ?4, rest_seconds = ?5
         WHERE id = ?6
         RETURNING *",
    )
    .bind(set.weight)
    .bind(set.reps)
    .bind(set.rpe)
    .bind(set.is_failure)
    .bind(set.rest_seconds)
    .bind(set.id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn delete_workout_set<'e, E>(executor: E, set_id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM workout_sets WHERE id = ?1")
        .bind(set_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

// Personal records
pub async fn insert_personal_record_history<'e, E>(
    executor: E,
    record: &NewPersonalRecord,
) -> Result<PersonalRecord>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, PersonalRecord>(
        "INSERT INTO personal_record_history (user_id, exercise_id, record_type, value, set_id, achieved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING *",
    )
    .bind(record.user_id)
    .bind(record.exercise_id)
    .bind(record.record_type)
    .bind(record.value)
    .bind(record.set_id)
    .bind(record.achieved_at)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

/// Stores `record` as the current best only when it strictly beats the stored
/// value (or none exists). Returns whether a row was written.
pub async fn upsert_personal_record<'e, E>(executor: E, record: &NewPersonalRecord) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO personal_records (user_id, exercise_id, record_type, value, set_id, achieved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT (user_id, exercise_id, record_type) DO UPDATE SET
             value = excluded.value,
             set_id = excluded.set_id,
             achieved_at = excluded.achieved_at
         WHERE excluded.value > personal_records.value",
    )
    .bind(record.user_id)
    .bind(record.exercise_id)
    .bind(record.record_type)
    .bind(record.value)
    .bind(record.set_id)
    .bind(record.achieved_at)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_user_personal_records<'e, E>(
    executor: E,
    user_id: i64,
    exercise_id: Option<i64>,
) -> Result<Vec<PersonalRecord>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, PersonalRecord>(
        "SELECT * FROM personal_records
         WHERE user_id = ?1 AND (?2 IS NULL OR exercise_id = ?2)
         ORDER BY exercise_id, record_type",
    )
    .bind(user_id)
    .bind(exercise_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_personal_record_history<'e, E>(
    executor: E,
    user_id: i64,
    exercise_id: Option<i64>,
) -> Result<Vec<PersonalRecord>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, PersonalRecord>(
        "SELECT * FROM personal_record_history
         WHERE user_id = ?1 AND (?2 IS NULL OR exercise_id = ?2)
         ORDER BY achieved_at DESC, id DESC",
    )
    .bind(user_id)
    .bind(exercise_id)
    .fetch_all(executor)
    .await
    .map_err(Into::into)
}

// Goals
pub async fn create_goal<'e, E>(executor: E, user_id: i64, goal: &NewGoal) -> Result<Goal>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Goal>(
        "INSERT INTO goals (user_id, exercise_id, goal_type, target_value, deadline, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING *",
    )
    .bind(user_id)
    .bind(goal.exercise_id)
    .bind(goal.goal_type)
    .bind(goal.target_value)
    .bind(goal.deadline)
    .bind(Utc::now())
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn get_goal<'e, E>(executor: E, goal_id: i64) -> Result<Option<Goal>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = ?1")
        .bind(goal_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
}

pub async fn get_user_goals<'e, E>(executor: E, user_id: i64) -> Result<Vec<Goal>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE user_id = ?1 ORDER BY id")
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
}

pub async fn write_goal<'e, E>(executor: E, goal: &Goal) -> Result<Goal>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Goal>(
        "UPDATE goals SET target_value = ?1, current_value = ?2, deadline = ?3, achieved = ?4, achieved_at = ?5
         WHERE id = ?6
         RETURNING *",
    )
    .bind(goal.target_value)
    .bind(goal.current_value)
    .bind(goal.deadline)
    .bind(goal.achieved)
    .bind(goal.achieved_at)
    .bind(goal.id)
    .fetch_one(executor)
    .await
    .map_err(Into::into)
}

pub async fn delete_goal<'e, E>(executor: E, goal_id: i64) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM goals WHERE id = ?1")
        .bind(goal_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
