//! Statistics and personal-record derivation.
//!
//! Everything in here is pure: callers load sessions and sets from the store
//! and hand them over as slices, so the numbers can be checked without a
//! database.

mod aggregate;
mod profile;
mod records;
mod summary;

pub use aggregate::{ExerciseStats, SessionHistoryEntry, compute_exercise_stats, round_to_tenth};
pub use profile::{
    GoalProgress, ProfileStats, ProgressPoint, compute_goal_progress, compute_profile_stats,
    progress_points,
};
pub use records::{PersonalBest, detect_session_bests};
pub use summary::{SessionTotals, session_totals};
