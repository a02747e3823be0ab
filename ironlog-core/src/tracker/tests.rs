use super::*;
use crate::db::models::{
    EquipmentType, GoalType, MAX_LOAD, NewExercise, NewGoal, NewRoutineExercise, NewWorkoutSet,
    RecordType, UpdateGoal, UpdateRoutine, UpdateWorkoutSet,
};
use crate::errors::{IronlogError, domain_error};

async fn tracker_with_exercise() -> (Tracker, i64) {
    let tracker = Tracker::in_memory("tester").await.unwrap();
    let exercise = tracker
        .create_exercise(&NewExercise::named("Bench Press"))
        .await
        .unwrap();
    (tracker, exercise.id)
}

fn record_value(records: &[crate::db::models::PersonalRecord], record_type: RecordType) -> i64 {
    records
        .iter()
        .filter(|r| r.record_type == record_type)
        .map(|r| r.value)
        .max()
        .expect("record present")
}

#[tokio::test]
async fn add_set_keeps_session_totals_in_sync() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();

    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 2, 90, 8))
        .await
        .unwrap();

    let session = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(session.total_volume, 1520);
    assert_eq!(session.total_sets, 2);

    let sets = tracker.session_sets(session.id).await.unwrap();
    let volume: i64 = sets.iter().map(|s| s.volume()).sum();
    assert_eq!(session.total_volume, volume);
    assert_eq!(session.total_sets, sets.len() as i64);
}

#[tokio::test]
async fn exercise_stats_scenario() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 2, 90, 8))
        .await
        .unwrap();

    // Still active: counted in totals, absent from history.
    let stats = tracker.exercise_stats(bench).await.unwrap();
    assert_eq!(stats.total_sets, 2);
    assert_eq!(stats.max_weight, 90);
    assert_eq!(stats.max_reps, 10);
    assert_eq!(stats.total_volume, 1520);
    assert_eq!(stats.avg_weight, 85.0);
    assert_eq!(stats.avg_reps, 9.0);
    assert!(stats.history.is_empty());

    tracker.finish_workout(session.id).await.unwrap();
    let stats = tracker.exercise_stats(bench).await.unwrap();
    assert_eq!(stats.history.len(), 1);
    assert_eq!(stats.history[0].session_id, session.id);
    assert_eq!(stats.history[0].total_volume, 1520);
}

#[tokio::test]
async fn exercise_stats_for_unknown_exercise_is_zeroed() {
    let (tracker, _) = tracker_with_exercise().await;
    let stats = tracker.exercise_stats(12345).await.unwrap();
    assert_eq!(stats, crate::stats::ExerciseStats::default());
}

#[tokio::test]
async fn records_keep_best_and_log_every_detection() {
    let (tracker, bench) = tracker_with_exercise().await;

    let first = tracker.start_workout("Heavy day", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(first.id, bench, 1, 100, 5))
        .await
        .unwrap();
    tracker.finish_workout(first.id).await.unwrap();

    let second = tracker.start_workout("Light day", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(second.id, bench, 1, 50, 12))
        .await
        .unwrap();

    let bests = tracker.personal_records(Some(bench)).await.unwrap();
    assert_eq!(bests.len(), 3);
    assert_eq!(record_value(&bests, RecordType::MaxWeight), 100);
    assert_eq!(record_value(&bests, RecordType::MaxReps), 12);
    assert_eq!(record_value(&bests, RecordType::MaxVolume), 600);

    // The light set still produced a max_weight=50 detection in the log.
    let history = tracker.personal_record_history(Some(bench)).await.unwrap();
    assert_eq!(history.len(), 6);
    assert!(
        history
            .iter()
            .any(|r| r.record_type == RecordType::MaxWeight && r.value == 50)
    );
    assert_eq!(record_value(&history, RecordType::MaxWeight), 100);
}

#[tokio::test]
async fn update_personal_records_is_noop_without_sets_or_session() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Empty", None).await.unwrap();

    assert!(
        tracker
            .update_personal_records(bench, session.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        tracker
            .update_personal_records(bench, 9999)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(tracker.personal_records(None).await.unwrap().is_empty());
    assert!(tracker.personal_record_history(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn finished_sessions_reject_new_sets() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Done", None).await.unwrap();
    tracker.finish_workout(session.id).await.unwrap();

    let err = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 60, 5))
        .await
        .unwrap_err();
    assert_eq!(
        domain_error(&err),
        Some(&IronlogError::SessionFinished(session.id))
    );
    assert!(tracker.session_sets(session.id).await.unwrap().is_empty());

    let err = tracker.finish_workout(session.id).await.unwrap_err();
    assert_eq!(
        domain_error(&err),
        Some(&IronlogError::SessionFinished(session.id))
    );
}

#[tokio::test]
async fn invalid_sets_are_rejected_before_touching_storage() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();

    let mut bad = NewWorkoutSet::new(session.id, bench, 1, 0, 5);
    let err = tracker.add_set(&bad).await.unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));

    bad.weight = 60;
    bad.rpe = Some(11);
    let err = tracker.add_set(&bad).await.unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));

    let err = tracker
        .add_set(&NewWorkoutSet::new(9999, bench, 1, 60, 5))
        .await
        .unwrap_err();
    assert!(matches!(
        domain_error(&err),
        Some(IronlogError::NotFound { .. })
    ));

    let session = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(session.total_sets, 0);
}

#[tokio::test]
async fn oversized_sets_are_rejected_without_panicking() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Silly", None).await.unwrap();

    let err = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 5_000_000_000, 5_000_000_000))
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));

    // Two maximal sets still fit in the session total; a third does not.
    for set_number in 1..=2 {
        tracker
            .add_set(&NewWorkoutSet::new(session.id, bench, set_number, MAX_LOAD, MAX_LOAD))
            .await
            .unwrap();
    }
    let err = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 3, MAX_LOAD, MAX_LOAD))
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));

    let current = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(current.total_sets, 2);
    assert_eq!(current.total_volume, 2 * MAX_LOAD * MAX_LOAD);
    assert_eq!(tracker.session_sets(session.id).await.unwrap().len(), 2);

    let bests = tracker.personal_records(Some(bench)).await.unwrap();
    assert_eq!(record_value(&bests, RecordType::MaxVolume), MAX_LOAD * MAX_LOAD);
}

async fn break_record_history(tracker: &Tracker) {
    sqlx::query(
        "CREATE TRIGGER fail_record_history BEFORE INSERT ON personal_record_history
         BEGIN SELECT RAISE(ABORT, 'record history unavailable'); END",
    )
    .execute(&tracker.db_pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn add_set_rolls_back_when_record_update_fails() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    break_record_history(&tracker).await;

    let err = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<sqlx::Error>().is_some());
    assert!(err.to_string().contains("record history unavailable"));

    assert!(tracker.session_sets(session.id).await.unwrap().is_empty());
    let current = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(current.total_sets, 0);
    assert_eq!(current.total_volume, 0);
    assert!(tracker.personal_records(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_set_rolls_back_when_record_update_fails() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    let logged = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();
    break_record_history(&tracker).await;

    tracker
        .update_set(
            logged.id,
            &UpdateWorkoutSet {
                weight: Some(120),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    let sets = tracker.session_sets(session.id).await.unwrap();
    assert_eq!(sets, vec![logged]);
    let current = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(current.total_volume, 800);
    let bests = tracker.personal_records(Some(bench)).await.unwrap();
    assert_eq!(record_value(&bests, RecordType::MaxWeight), 80);
}

#[tokio::test]
async fn only_one_active_session_per_user() {
    let (tracker, _) = tracker_with_exercise().await;
    let first = tracker.start_workout("Morning", None).await.unwrap();

    let err = tracker.start_workout("Evening", None).await.unwrap_err();
    assert_eq!(
        domain_error(&err),
        Some(&IronlogError::ActiveSessionExists(first.id))
    );

    assert_eq!(tracker.active_workout().await.unwrap().unwrap().id, first.id);
    tracker.finish_workout(first.id).await.unwrap();
    assert!(tracker.active_workout().await.unwrap().is_none());
    tracker.start_workout("Evening", None).await.unwrap();
}

#[tokio::test]
async fn editing_and_deleting_sets_recomputes_totals() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    let a = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();
    let b = tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 2, 90, 8))
        .await
        .unwrap();

    let edited = tracker
        .update_set(
            a.id,
            &UpdateWorkoutSet {
                weight: Some(100),
                rpe: Some(Some(9)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.weight, 100);
    assert_eq!(edited.reps, 10);
    assert_eq!(edited.rpe, Some(9));

    let current = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(current.total_volume, 1000 + 720);

    let bests = tracker.personal_records(Some(bench)).await.unwrap();
    assert_eq!(record_value(&bests, RecordType::MaxWeight), 100);

    assert_eq!(tracker.delete_set(b.id).await.unwrap(), 1);
    let current = tracker.get_workout(session.id).await.unwrap();
    assert_eq!(current.total_volume, 1000);
    assert_eq!(current.total_sets, 1);

    assert_eq!(tracker.delete_set(b.id).await.unwrap(), 0);
}

#[tokio::test]
async fn next_set_number_follows_logged_sets() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    assert_eq!(tracker.next_set_number(session.id, bench).await.unwrap(), 1);

    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 2, 80, 9))
        .await
        .unwrap();
    assert_eq!(tracker.next_set_number(session.id, bench).await.unwrap(), 3);
}

#[tokio::test]
async fn profile_counts_finished_sessions_and_days() {
    let (tracker, bench) = tracker_with_exercise().await;

    for (name, weight) in [("One", 80), ("Two", 60)] {
        let session = tracker.start_workout(name, None).await.unwrap();
        tracker
            .add_set(&NewWorkoutSet::new(session.id, bench, 1, weight, 10))
            .await
            .unwrap();
        tracker.finish_workout(session.id).await.unwrap();
    }
    let open = tracker.start_workout("Open", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(open.id, bench, 1, 100, 1))
        .await
        .unwrap();

    let profile = tracker.profile_stats().await.unwrap();
    assert_eq!(profile.total_workouts, 2);
    assert_eq!(profile.total_volume, 1400);
    assert_eq!(profile.total_sets, 2);
    // Both finished within this test run; allow for a midnight rollover.
    assert!((1..=2).contains(&profile.days_active));
}

#[tokio::test]
async fn other_users_data_is_invisible() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Mine", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();

    let other = Tracker::with_pool(tracker.db_pool.clone(), "someone-else")
        .await
        .unwrap();
    let err = other.session_sets(session.id).await.unwrap_err();
    assert!(matches!(
        domain_error(&err),
        Some(IronlogError::NotFound { .. })
    ));
    assert_eq!(
        other.exercise_stats(bench).await.unwrap(),
        crate::stats::ExerciseStats::default()
    );
    assert!(
        other
            .update_personal_records(bench, session.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn deleting_a_workout_cascades_to_sets() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Gone", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();

    assert_eq!(tracker.delete_workout(session.id).await.unwrap(), 1);
    assert_eq!(tracker.exercise_stats(bench).await.unwrap().total_sets, 0);
    assert!(tracker.workout_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn routines_feed_workouts() {
    let (tracker, bench) = tracker_with_exercise().await;
    assert_eq!(tracker.seed_muscle_groups().await.unwrap(), 8);
    assert_eq!(tracker.seed_muscle_groups().await.unwrap(), 0);
    assert_eq!(tracker.muscle_groups().await.unwrap().len(), 8);

    let routine = tracker.create_routine("Push A", Some("chest focus")).await.unwrap();
    let entry = tracker
        .add_routine_exercise(&NewRoutineExercise {
            routine_id: routine.id,
            exercise_id: bench,
            order_index: 0,
            target_sets: None,
            target_reps: Some(8),
            rest_seconds: None,
        })
        .await
        .unwrap();
    assert_eq!(entry.target_sets, 3);
    assert_eq!(entry.target_reps, 8);
    assert_eq!(entry.rest_seconds, 90);

    let session = tracker.start_workout("Push A", Some(routine.id)).await.unwrap();
    assert_eq!(session.routine_id, Some(routine.id));
    tracker.finish_workout(session.id).await.unwrap();

    let err = tracker.start_workout("Nope", Some(999)).await.unwrap_err();
    assert!(matches!(
        domain_error(&err),
        Some(IronlogError::NotFound { .. })
    ));

    assert_eq!(tracker.remove_routine_exercise(entry.id).await.unwrap(), 1);
    assert!(tracker.routine_exercises(routine.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn routines_can_be_edited_and_duplicated() {
    let (tracker, bench) = tracker_with_exercise().await;
    let squat = tracker.create_exercise(&NewExercise::named("Squat")).await.unwrap();
    let routine = tracker.create_routine("Full body", None).await.unwrap();
    for (order_index, exercise_id) in [(0, bench), (1, squat.id)] {
        tracker
            .add_routine_exercise(&NewRoutineExercise {
                routine_id: routine.id,
                exercise_id,
                order_index,
                target_sets: Some(5),
                target_reps: Some(5),
                rest_seconds: Some(180),
            })
            .await
            .unwrap();
    }

    let renamed = tracker
        .update_routine(
            routine.id,
            &UpdateRoutine {
                name: Some("Strength A".into()),
                description: Some(Some("5x5".into())),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Strength A");
    assert_eq!(renamed.description.as_deref(), Some("5x5"));

    let err = tracker
        .update_routine(
            routine.id,
            &UpdateRoutine {
                name: Some("   ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));

    let copy = tracker.duplicate_routine(routine.id).await.unwrap();
    assert_ne!(copy.id, routine.id);
    assert_eq!(copy.name, "Strength A (copy)");
    assert_eq!(copy.description.as_deref(), Some("5x5"));

    let copied = tracker.routine_exercises(copy.id).await.unwrap();
    let exercise_ids: Vec<i64> = copied.iter().map(|e| e.exercise_id).collect();
    assert_eq!(exercise_ids, vec![bench, squat.id]);
    assert!(copied.iter().all(|e| e.target_sets == 5 && e.rest_seconds == 180));
    assert_eq!(tracker.routine_exercises(routine.id).await.unwrap().len(), 2);

    let other = Tracker::with_pool(tracker.db_pool.clone(), "someone-else")
        .await
        .unwrap();
    let err = other.duplicate_routine(routine.id).await.unwrap_err();
    assert!(matches!(
        domain_error(&err),
        Some(IronlogError::NotFound { .. })
    ));
}

#[tokio::test]
async fn default_exercises_are_seeded_once_per_user() {
    let tracker = Tracker::in_memory("tester").await.unwrap();
    let seeded = tracker.seed_default_exercises().await.unwrap();
    assert!(seeded > 0);
    assert_eq!(tracker.seed_default_exercises().await.unwrap(), 0);
    assert_eq!(tracker.muscle_groups().await.unwrap().len(), 8);

    let exercises = tracker.exercises().await.unwrap();
    assert_eq!(exercises.len() as u64, seeded);
    assert!(exercises.iter().all(|e| !e.is_custom));
    assert!(exercises.iter().all(|e| e.muscle_group_id.is_some()));

    let bench = exercises
        .iter()
        .find(|e| e.name == "Bench Press")
        .expect("bench press seeded");
    assert_eq!(bench.equipment_type, Some(EquipmentType::Barbell));

    let custom = tracker
        .create_exercise(&NewExercise::named("Zercher Squat"))
        .await
        .unwrap();
    assert!(custom.is_custom);

    let other = Tracker::with_pool(tracker.db_pool.clone(), "someone-else")
        .await
        .unwrap();
    assert_eq!(other.seed_default_exercises().await.unwrap(), seeded);
}

#[tokio::test]
async fn goals_track_achievement() {
    let (tracker, bench) = tracker_with_exercise().await;
    let goal = tracker
        .create_goal(&NewGoal {
            exercise_id: Some(bench),
            goal_type: GoalType::Weight,
            target_value: 120,
            deadline: None,
        })
        .await
        .unwrap();
    tracker
        .create_goal(&NewGoal {
            exercise_id: None,
            goal_type: GoalType::Frequency,
            target_value: 3,
            deadline: None,
        })
        .await
        .unwrap();

    let updated = tracker
        .update_goal(
            goal.id,
            &UpdateGoal {
                current_value: Some(120),
                achieved: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.achieved);
    assert!(updated.achieved_at.is_some());

    let progress = tracker.goal_progress().await.unwrap();
    assert_eq!(progress.total, 2);
    assert_eq!(progress.achieved, 1);
    assert_eq!(progress.in_progress, 1);

    let err = tracker
        .create_goal(&NewGoal {
            exercise_id: None,
            goal_type: GoalType::Reps,
            target_value: 0,
            deadline: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), Some(IronlogError::Invalid(_))));
}

#[tokio::test]
async fn export_contains_sessions_with_sets() {
    let (tracker, bench) = tracker_with_exercise().await;
    let session = tracker.start_workout("Push", None).await.unwrap();
    tracker
        .add_set(&NewWorkoutSet::new(session.id, bench, 1, 80, 10))
        .await
        .unwrap();

    let export = tracker.export_data().await.unwrap();
    assert_eq!(export["user"]["username"], "tester");
    assert_eq!(export["exercises"].as_array().unwrap().len(), 1);
    let sessions = export["workout_sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["name"], "Push");
    assert_eq!(sessions[0]["sets"][0]["weight"], 80);
    assert_eq!(export["personal_records"].as_array().unwrap().len(), 3);
    assert_eq!(
        export["personal_records"][0]["record_type"]
            .as_str()
            .map(|s| s.starts_with("max_")),
        Some(true)
    );
}
