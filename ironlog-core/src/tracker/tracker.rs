use crate::db;
use crate::db::models::{Exercise, User, WorkoutSession};
use crate::db::operations::{get_exercise, get_or_create_user, get_workout_session};
use crate::errors::IronlogError;
use anyhow::Result;
use log::info;
use sqlx::{SqliteExecutor, SqlitePool};

pub struct Tracker {
    pub db_pool: SqlitePool,
    pub user: User,
}

impl Tracker {
    /// Opens (creating if needed) the database at `db_path` and acts as `username`.
    pub async fn new(db_path: &str, username: &str) -> Result<Self> {
        let pool = db::connect_pool(db_path).await?;
        Self::with_pool(pool, username).await
    }

    /// Like [`Tracker::new`], with the path taken from `DATABASE_URL`.
    pub async fn from_env(username: &str) -> Result<Self> {
        let db_path = db::get_db_path().await?;
        Self::new(db_path, username).await
    }

    pub async fn in_memory(username: &str) -> Result<Self> {
        let pool = db::memory_pool().await?;
        Self::with_pool(pool, username).await
    }

    pub async fn with_pool(pool: SqlitePool, username: &str) -> Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(IronlogError::Invalid("username cannot be empty".into()).into());
        }

        db::init_database(&pool).await?;
        let user = get_or_create_user(&pool, username).await?;
        info!("Tracker ready for user {} (id {})", user.username, user.id);

        Ok(Self {
            db_pool: pool,
            user,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    /// Loads a session owned by this user. Other users' sessions look missing.
    pub(crate) async fn owned_session<'e, E>(
        &self,
        executor: E,
        session_id: i64,
    ) -> Result<WorkoutSession>
    where
        E: SqliteExecutor<'e>,
    {
        match get_workout_session(executor, session_id).await? {
            Some(session) if session.user_id == self.user.id => Ok(session),
            _ => Err(IronlogError::not_found("workout session", session_id).into()),
        }
    }

    pub(crate) async fn owned_exercise<'e, E>(&self, executor: E, exercise_id: i64) -> Result<Exercise>
    where
        E: SqliteExecutor<'e>,
    {
        match get_exercise(executor, exercise_id).await? {
            Some(exercise) if exercise.user_id == self.user.id => Ok(exercise),
            _ => Err(IronlogError::not_found("exercise", exercise_id).into()),
        }
    }
}

pub(crate) fn require_name(name: &str, what: &str) -> Result<(), IronlogError> {
    if name.trim().is_empty() {
        return Err(IronlogError::Invalid(format!("{what} name cannot be empty")));
    }
    Ok(())
}
