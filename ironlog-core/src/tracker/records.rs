use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use sqlx::SqliteConnection;

use crate::db::models::NewPersonalRecord;
use crate::db::operations::{
    get_sets_for_session, get_workout_session, insert_personal_record_history,
    update_session_totals, upsert_personal_record,
};
use crate::stats::{PersonalBest, SessionTotals, detect_session_bests, session_totals};
use crate::tracker::Tracker;

/// Re-reads every set of the session and writes the recomputed totals back.
pub async fn refresh_session_totals(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<SessionTotals> {
    let sets = get_sets_for_session(&mut *conn, session_id).await?;
    let totals = session_totals(&sets)?;
    update_session_totals(&mut *conn, session_id, &totals).await?;
    debug!(
        "Session {} totals: volume={} sets={}",
        session_id, totals.total_volume, totals.total_sets
    );
    Ok(totals)
}

/// Detects the session's maxima for one exercise and records them.
///
/// Every detection is appended to the record history. The current-best table
/// is only written when a value strictly beats what is stored. Does nothing
/// when the session has no sets for the exercise or does not exist.
pub async fn refresh_personal_records(
    conn: &mut SqliteConnection,
    exercise_id: i64,
    session_id: i64,
) -> Result<Vec<PersonalBest>> {
    let sets = get_sets_for_session(&mut *conn, session_id).await?;
    let bests = detect_session_bests(&sets, exercise_id);
    if bests.is_empty() {
        debug!(
            "No sets for exercise {} in session {}, skipping records",
            exercise_id, session_id
        );
        return Ok(bests);
    }

    let Some(session) = get_workout_session(&mut *conn, session_id).await? else {
        warn!("Session {} vanished while updating records", session_id);
        return Ok(Vec::new());
    };

    let achieved_at = Utc::now();
    for best in &bests {
        let record = NewPersonalRecord {
            user_id: session.user_id,
            exercise_id,
            record_type: best.record_type,
            value: best.value,
            set_id: best.set_id,
            achieved_at,
        };
        insert_personal_record_history(&mut *conn, &record).await?;
        if upsert_personal_record(&mut *conn, &record).await? {
            info!(
                "New {} record for exercise {}: {}",
                best.record_type, exercise_id, best.value
            );
        }
    }

    Ok(bests)
}

impl Tracker {
    /// Recomputes a session's total volume and set count from its sets.
    pub async fn recompute_session_totals(&self, session_id: i64) -> Result<SessionTotals> {
        let mut tx = self.db_pool.begin().await?;
        self.owned_session(&mut *tx, session_id).await?;
        let totals = refresh_session_totals(&mut tx, session_id).await?;
        tx.commit().await?;
        Ok(totals)
    }

    /// Re-runs record detection for one exercise of one session.
    ///
    /// A session that is missing (or belongs to someone else) is a silent no-op.
    pub async fn update_personal_records(
        &self,
        exercise_id: i64,
        session_id: i64,
    ) -> Result<Vec<PersonalBest>> {
        let mut tx = self.db_pool.begin().await?;
        match get_workout_session(&mut *tx, session_id).await? {
            Some(session) if session.user_id == self.user.id => {}
            _ => return Ok(Vec::new()),
        }
        let bests = refresh_personal_records(&mut tx, exercise_id, session_id).await?;
        tx.commit().await?;
        Ok(bests)
    }
}
