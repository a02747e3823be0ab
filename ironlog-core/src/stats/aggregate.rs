use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::db::models::{WorkoutSession, WorkoutSet};

/// Descriptive statistics for one exercise across a user's whole history.
///
/// The all-zero value (`Default`) is the answer for an exercise with no sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExerciseStats {
    pub total_sets: i64,
    pub total_volume: i64,
    pub max_weight: i64,
    pub max_reps: i64,
    pub avg_weight: f64,
    pub avg_reps: f64,
    pub history: Vec<SessionHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionHistoryEntry {
    pub session_id: i64,
    pub date: DateTime<Utc>,
    pub sets: Vec<WorkoutSet>,
    pub total_volume: i64,
    pub max_weight: i64,
}

/// Sums without overflowing; a total past `i64::MAX` reads as `i64::MAX`.
pub(crate) fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

/// Rounds half-up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregates the sets of `exercise_id` that belong to `sessions`.
///
/// Sets from sessions not in `sessions` are ignored. History only covers
/// finished sessions and is ordered by completion date, newest first.
pub fn compute_exercise_stats(
    sessions: &[WorkoutSession],
    sets: &[WorkoutSet],
    exercise_id: i64,
) -> ExerciseStats {
    let finished_at: HashMap<i64, Option<DateTime<Utc>>> =
        sessions.iter().map(|s| (s.id, s.finished_at)).collect();

    let matching: Vec<&WorkoutSet> = sets
        .iter()
        .filter(|s| s.exercise_id == exercise_id && finished_at.contains_key(&s.session_id))
        .collect();

    if matching.is_empty() {
        return ExerciseStats::default();
    }

    let total_sets = matching.len() as i64;
    let total_volume = saturating_sum(matching.iter().map(|s| s.volume()));
    let max_weight = matching.iter().map(|s| s.weight).max().unwrap_or(0);
    let max_reps = matching.iter().map(|s| s.reps).max().unwrap_or(0);
    let weight_sum = saturating_sum(matching.iter().map(|s| s.weight));
    let reps_sum = saturating_sum(matching.iter().map(|s| s.reps));

    let mut per_session: BTreeMap<i64, Vec<&WorkoutSet>> = BTreeMap::new();
    for &set in &matching {
        per_session.entry(set.session_id).or_default().push(set);
    }

    let mut history: Vec<SessionHistoryEntry> = per_session
        .into_iter()
        .filter_map(|(session_id, session_sets)| {
            let date = finished_at.get(&session_id).copied().flatten()?;
            Some(SessionHistoryEntry {
                session_id,
                date,
                total_volume: saturating_sum(session_sets.iter().map(|s| s.volume())),
                max_weight: session_sets.iter().map(|s| s.weight).max().unwrap_or(0),
                sets: session_sets.into_iter().cloned().collect(),
            })
        })
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date).then(b.session_id.cmp(&a.session_id)));

    ExerciseStats {
        total_sets,
        total_volume,
        max_weight,
        max_reps,
        avg_weight: round_to_tenth(weight_sum as f64 / total_sets as f64),
        avg_reps: round_to_tenth(reps_sum as f64 / total_sets as f64),
        history,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn session(id: i64, finished_day: Option<u32>) -> WorkoutSession {
        WorkoutSession {
            id,
            user_id: 1,
            routine_id: None,
            name: format!("Session {id}"),
            started_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            finished_at: finished_day.map(|d| Utc.with_ymd_and_hms(2025, 3, d, 10, 0, 0).unwrap()),
            total_volume: 0,
            total_sets: 0,
            notes: None,
        }
    }

    pub(crate) fn set(
        id: i64,
        session_id: i64,
        exercise_id: i64,
        set_number: i64,
        weight: i64,
        reps: i64,
    ) -> WorkoutSet {
        WorkoutSet {
            id,
            session_id,
            exercise_id,
            set_number,
            weight,
            reps,
            rpe: None,
            is_failure: false,
            rest_seconds: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn empty_history_is_all_zero() {
        let stats = compute_exercise_stats(&[session(1, Some(2))], &[], 7);
        assert_eq!(stats, ExerciseStats::default());
        assert!(stats.history.is_empty());
    }

    #[test]
    fn huge_volumes_saturate() {
        let sets = vec![set(1, 1, 7, 1, i64::MAX, 2), set(2, 1, 7, 2, 10, 1)];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 7);
        assert_eq!(stats.total_volume, i64::MAX);
        assert_eq!(stats.history[0].total_volume, i64::MAX);
    }

    #[test]
    fn unknown_exercise_yields_zeroed_stats() {
        let sets = vec![set(1, 1, 7, 1, 80, 10)];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 99);
        assert_eq!(stats, ExerciseStats::default());
    }

    #[test]
    fn two_set_scenario() {
        let sets = vec![set(1, 1, 7, 1, 80, 10), set(2, 1, 7, 2, 90, 8)];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 7);

        assert_eq!(stats.total_sets, 2);
        assert_eq!(stats.max_weight, 90);
        assert_eq!(stats.max_reps, 10);
        assert_eq!(stats.total_volume, 1520);
        assert_eq!(stats.avg_weight, 85.0);
        assert_eq!(stats.avg_reps, 9.0);
        assert_eq!(stats.history.len(), 1);
        assert_eq!(stats.history[0].total_volume, 1520);
        assert_eq!(stats.history[0].max_weight, 90);
        assert_eq!(stats.history[0].sets.len(), 2);
    }

    #[test]
    fn averages_round_to_one_decimal() {
        // weights 100, 100, 101 -> 100.333..; reps 5, 5, 6 -> 5.333..
        let sets = vec![
            set(1, 1, 7, 1, 100, 5),
            set(2, 1, 7, 2, 100, 5),
            set(3, 1, 7, 3, 101, 6),
        ];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 7);
        assert_eq!(stats.avg_weight, 100.3);
        assert_eq!(stats.avg_reps, 5.3);

        // reps 5, 6 -> 5.5 stays; weights 60, 61, 61, 61 -> 60.75 rounds up to 60.8
        let sets = vec![
            set(1, 1, 7, 1, 60, 5),
            set(2, 1, 7, 2, 61, 6),
            set(3, 1, 7, 3, 61, 5),
            set(4, 1, 7, 4, 61, 6),
        ];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 7);
        assert_eq!(stats.avg_weight, 60.8);
        assert_eq!(stats.avg_reps, 5.5);
    }

    #[test]
    fn history_skips_active_sessions_but_totals_include_them() {
        let sessions = vec![session(1, Some(2)), session(2, None)];
        let sets = vec![set(1, 1, 7, 1, 50, 10), set(2, 2, 7, 1, 70, 5)];
        let stats = compute_exercise_stats(&sessions, &sets, 7);

        assert_eq!(stats.total_sets, 2);
        assert_eq!(stats.max_weight, 70);
        assert_eq!(stats.history.len(), 1);
        assert_eq!(stats.history[0].session_id, 1);
    }

    #[test]
    fn history_is_newest_first() {
        let sessions = vec![session(1, Some(3)), session(2, Some(10)), session(3, Some(5))];
        let sets = vec![
            set(1, 1, 7, 1, 50, 10),
            set(2, 2, 7, 1, 60, 10),
            set(3, 3, 7, 1, 55, 10),
            set(4, 2, 8, 1, 200, 1),
        ];
        let stats = compute_exercise_stats(&sessions, &sets, 7);
        let order: Vec<i64> = stats.history.iter().map(|h| h.session_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn sets_outside_known_sessions_are_ignored() {
        let sets = vec![set(1, 1, 7, 1, 50, 10), set(2, 42, 7, 1, 500, 10)];
        let stats = compute_exercise_stats(&[session(1, Some(2))], &sets, 7);
        assert_eq!(stats.total_sets, 1);
        assert_eq!(stats.max_weight, 50);
    }
}
