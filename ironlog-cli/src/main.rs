use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{LevelFilter, debug};
use std::path::PathBuf;
use std::str::FromStr;

use ironlog::Tracker;
use ironlog::db;
use ironlog::db::models::{
    EquipmentType, GoalType, NewExercise, NewGoal, NewWorkoutSet, UpdateRoutine, WorkoutSession,
};

#[derive(Parser, Debug)]
#[command(version, about = "Ironlog - Workout Tracker CLI", long_about = None)]
struct Args {
    /// SQLite database file or `sqlite:` URL
    #[arg(short, long, global = true, env = "DATABASE_URL")]
    database: Option<String>,
    #[arg(short, long, global = true, env = "IRONLOG_USER", default_value = "default")]
    user: String,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and seed muscle groups and the stock exercise library
    Init {
        /// Only seed muscle groups
        #[arg(long)]
        no_exercises: bool,
    },
    /// Start a workout session
    Start {
        name: String,
        #[arg(short, long)]
        routine: Option<i64>,
    },
    /// Show the workout in progress
    Active,
    /// Finish a workout (the active one by default)
    Finish { session: Option<i64> },
    /// Log a set
    AddSet {
        #[arg(short, long)]
        exercise: i64,
        #[arg(short, long)]
        weight: i64,
        #[arg(short, long)]
        reps: i64,
        #[arg(short = 'n', long)]
        set_number: Option<i64>,
        #[arg(long)]
        rpe: Option<i64>,
        #[arg(long)]
        failure: bool,
        #[arg(long)]
        rest: Option<i64>,
        /// Defaults to the active workout
        #[arg(short, long)]
        session: Option<i64>,
    },
    /// List the sets of a workout
    Sets { session: Option<i64> },
    /// List all workouts
    History,
    /// Statistics for one exercise
    Stats {
        exercise: i64,
        #[arg(long)]
        json: bool,
    },
    /// Personal records
    Prs {
        #[arg(short, long)]
        exercise: Option<i64>,
        /// Show every detection instead of current bests
        #[arg(long)]
        history: bool,
    },
    /// Totals over finished workouts
    Profile,
    /// Recent per-session progress for one exercise
    Chart {
        exercise: i64,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    Exercises,
    AddExercise {
        name: String,
        #[arg(short, long)]
        muscle_group: Option<i64>,
        #[arg(long)]
        equipment: Option<String>,
    },
    MuscleGroups,
    Routines,
    AddRoutine {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Rename a routine or change its description
    UpdateRoutine {
        routine: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Copy a routine with all its exercises
    DuplicateRoutine { routine: i64 },
    Goals,
    AddGoal {
        /// weight, reps, volume or frequency
        goal_type: String,
        target: i64,
        #[arg(short, long)]
        exercise: Option<i64>,
    },
    /// Dump everything as JSON
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete all data
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    let _ = builder.try_init();
}

fn day(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn describe_session(session: &WorkoutSession) -> String {
    let status = match session.finished_at {
        Some(at) => format!("finished {}", day(at)),
        None => "in progress".to_string(),
    };
    format!(
        "{}, {}, started {}, {}, {} sets, {}kg",
        session.id,
        session.name,
        day(session.started_at),
        status,
        session.total_sets,
        session.total_volume
    )
}

async fn session_or_active(tracker: &Tracker, session: Option<i64>) -> Result<i64> {
    match session {
        Some(id) => Ok(id),
        None => tracker
            .active_workout()
            .await?
            .map(|s| s.id)
            .ok_or_else(|| anyhow!("no active workout; pass a session id")),
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(path) = &args.database {
        db::set_db_path(path).await?;
    }
    let tracker = Tracker::from_env(&args.user).await?;
    debug!("Running {:?} as {}", args.command, tracker.user.username);

    match args.command {
        Commands::Init { no_exercises } => {
            let groups = tracker.seed_muscle_groups().await?;
            let exercises = if no_exercises {
                0
            } else {
                tracker.seed_default_exercises().await?
            };
            println!(
                "Database ready for {} ({} muscle groups added, {} exercises added)",
                tracker.user.username, groups, exercises
            );
        }
        Commands::Start { name, routine } => {
            let session = tracker.start_workout(&name, routine).await?;
            println!("Started workout {}: {}", session.id, session.name);
        }
        Commands::Active => match tracker.active_workout().await? {
            Some(session) => println!("{}", describe_session(&session)),
            None => println!("No active workout"),
        },
        Commands::Finish { session } => {
            let id = session_or_active(&tracker, session).await?;
            let finished = tracker.finish_workout(id).await?;
            println!("Finished {}", describe_session(&finished));
        }
        Commands::AddSet {
            exercise,
            weight,
            reps,
            set_number,
            rpe,
            failure,
            rest,
            session,
        } => {
            let session_id = session_or_active(&tracker, session).await?;
            let set_number = match set_number {
                Some(n) => n,
                None => tracker.next_set_number(session_id, exercise).await?,
            };
            let new_set = NewWorkoutSet {
                rpe,
                is_failure: failure,
                rest_seconds: rest,
                ..NewWorkoutSet::new(session_id, exercise, set_number, weight, reps)
            };
            let created = tracker.add_set(&new_set).await?;
            println!("Logged set {}: {}", created.id, created);
        }
        Commands::Sets { session } => {
            let id = session_or_active(&tracker, session).await?;
            for set in tracker.session_sets(id).await? {
                println!("{}\t{}", set.id, set);
            }
        }
        Commands::History => {
            for session in tracker.workout_history().await? {
                println!("{}", describe_session(&session));
            }
        }
        Commands::Stats { exercise, json } => {
            let stats = tracker.exercise_stats(exercise).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Exercise {}", exercise);
            println!("Total sets: {}", stats.total_sets);
            println!("Total volume: {}kg", stats.total_volume);
            println!("Max weight: {}kg", stats.max_weight);
            println!("Max reps: {}", stats.max_reps);
            println!("Average weight: {:.1}kg", stats.avg_weight);
            println!("Average reps: {:.1}", stats.avg_reps);
            for entry in &stats.history {
                println!(
                    "\t{} session {}: {} sets, {}kg volume, top {}kg",
                    day(entry.date),
                    entry.session_id,
                    entry.sets.len(),
                    entry.total_volume,
                    entry.max_weight
                );
            }
        }
        Commands::Prs { exercise, history } => {
            let records = if history {
                tracker.personal_record_history(exercise).await?
            } else {
                tracker.personal_records(exercise).await?
            };
            if records.is_empty() {
                println!("No personal records yet");
            }
            for record in records {
                println!(
                    "exercise {} {}: {} ({})",
                    record.exercise_id,
                    record.record_type,
                    record.value,
                    day(record.achieved_at)
                );
            }
        }
        Commands::Profile => {
            let profile = tracker.profile_stats().await?;
            println!("Workouts: {}", profile.total_workouts);
            println!("Total volume: {}kg", profile.total_volume);
            println!("Total sets: {}", profile.total_sets);
            println!("Days active: {}", profile.days_active);
        }
        Commands::Chart { exercise, limit } => {
            let points = tracker.progress_chart(exercise, limit).await?;
            let peak = points.iter().map(|p| p.total_volume).max().unwrap_or(0);
            for point in points {
                let width = if peak > 0 {
                    (point.total_volume * 40 / peak) as usize
                } else {
                    0
                };
                println!(
                    "{} {:>8}kg {}",
                    point.date.format("%Y-%m-%d"),
                    point.total_volume,
                    "#".repeat(width)
                );
            }
        }
        Commands::Exercises => {
            for exercise in tracker.exercises().await? {
                let equipment = exercise
                    .equipment_type
                    .map(|e| e.as_str())
                    .unwrap_or("-");
                println!("{}, {}, {}", exercise.id, exercise.name, equipment);
            }
        }
        Commands::AddExercise {
            name,
            muscle_group,
            equipment,
        } => {
            let equipment_type = equipment
                .as_deref()
                .map(EquipmentType::from_str)
                .transpose()?;
            let exercise = tracker
                .create_exercise(&NewExercise {
                    muscle_group_id: muscle_group,
                    equipment_type,
                    ..NewExercise::named(&name)
                })
                .await?;
            println!("Created exercise {}: {}", exercise.id, exercise.name);
        }
        Commands::MuscleGroups => {
            for group in tracker.muscle_groups().await? {
                println!("{}, {}", group.id, group.name);
            }
        }
        Commands::Routines => {
            for routine in tracker.routines().await? {
                println!("{}, {}", routine.id, routine.name);
                for entry in tracker.routine_exercises(routine.id).await? {
                    println!(
                        "\texercise {}: {}x{}, rest {}s",
                        entry.exercise_id, entry.target_sets, entry.target_reps, entry.rest_seconds
                    );
                }
            }
        }
        Commands::AddRoutine { name, description } => {
            let routine = tracker.create_routine(&name, description.as_deref()).await?;
            println!("Created routine {}: {}", routine.id, routine.name);
        }
        Commands::UpdateRoutine {
            routine,
            name,
            description,
        } => {
            let updated = tracker
                .update_routine(
                    routine,
                    &UpdateRoutine {
                        name,
                        description: description.map(Some),
                    },
                )
                .await?;
            println!("Updated routine {}: {}", updated.id, updated.name);
        }
        Commands::DuplicateRoutine { routine } => {
            let copy = tracker.duplicate_routine(routine).await?;
            println!("Created routine {}: {}", copy.id, copy.name);
        }
        Commands::Goals => {
            let progress = tracker.goal_progress().await?;
            println!(
                "{} goals, {} achieved, {} in progress",
                progress.total, progress.achieved, progress.in_progress
            );
            for goal in tracker.goals().await? {
                println!(
                    "{}, {:?}, {}/{}{}",
                    goal.id,
                    goal.goal_type,
                    goal.current_value,
                    goal.target_value,
                    if goal.achieved { " (achieved)" } else { "" }
                );
            }
        }
        Commands::AddGoal {
            goal_type,
            target,
            exercise,
        } => {
            let goal = tracker
                .create_goal(&NewGoal {
                    exercise_id: exercise,
                    goal_type: GoalType::from_str(&goal_type)?,
                    target_value: target,
                    deadline: None,
                })
                .await?;
            println!("Created goal {}", goal.id);
        }
        Commands::Export { output } => {
            let export = serde_json::to_string_pretty(&tracker.export_data().await?)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, export)
                        .with_context(|| format!("writing export to {}", path.display()))?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", export),
            }
        }
        Commands::Reset { yes } => {
            if !yes {
                return Err(anyhow!("refusing to delete all data without --yes"));
            }
            db::drop_all_tables(&tracker.db_pool).await?;
            println!("All data deleted");
        }
    }

    Ok(())
}
