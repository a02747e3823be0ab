use crate::db::models::{Goal, NewGoal, UpdateGoal};
use crate::db::operations::{create_goal, delete_goal, get_goal, get_user_goals, write_goal};
use crate::errors::IronlogError;
use crate::stats::{GoalProgress, compute_goal_progress};
use crate::tracker::Tracker;
use anyhow::Result;
use chrono::Utc;

impl Tracker {
    pub async fn goals(&self) -> Result<Vec<Goal>> {
        get_user_goals(&self.db_pool, self.user.id).await
    }

    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal> {
        check_target(goal.target_value)?;
        if let Some(exercise_id) = goal.exercise_id {
            self.owned_exercise(&self.db_pool, exercise_id).await?;
        }
        create_goal(&self.db_pool, self.user.id, goal).await
    }

    /// Applies a partial edit. Marking a goal achieved stamps `achieved_at`;
    /// un-marking clears it.
    pub async fn update_goal(&self, goal_id: i64, update: &UpdateGoal) -> Result<Goal> {
        let original = self.owned_goal(goal_id).await?;
        if let Some(target) = update.target_value {
            check_target(target)?;
        }

        let achieved = update.achieved.unwrap_or(original.achieved);
        let achieved_at = match (original.achieved, achieved) {
            (false, true) => Some(Utc::now()),
            (_, false) => None,
            (true, true) => original.achieved_at,
        };

        let merged = Goal {
            target_value: update.target_value.unwrap_or(original.target_value),
            current_value: update.current_value.unwrap_or(original.current_value),
            deadline: update.deadline.unwrap_or(original.deadline),
            achieved,
            achieved_at,
            ..original
        };
        write_goal(&self.db_pool, &merged).await
    }

    pub async fn delete_goal(&self, goal_id: i64) -> Result<u64> {
        self.owned_goal(goal_id).await?;
        delete_goal(&self.db_pool, goal_id).await
    }

    pub async fn goal_progress(&self) -> Result<GoalProgress> {
        let goals = self.goals().await?;
        Ok(compute_goal_progress(&goals))
    }

    async fn owned_goal(&self, goal_id: i64) -> Result<Goal> {
        match get_goal(&self.db_pool, goal_id).await? {
            Some(goal) if goal.user_id == self.user.id => Ok(goal),
            _ => Err(IronlogError::not_found("goal", goal_id).into()),
        }
    }
}

fn check_target(target: i64) -> Result<(), IronlogError> {
    if target < 1 {
        return Err(IronlogError::Invalid(format!(
            "goal target must be at least 1, got {target}"
        )));
    }
    Ok(())
}
