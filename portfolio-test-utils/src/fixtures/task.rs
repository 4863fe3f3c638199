//! Task fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::TaskModel, TestContext};

impl TestContext {
    pub fn task(&self) -> TaskFixtures<'_> {
        TaskFixtures { context: self }
    }
}

pub struct TaskFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> TaskFixtures<'a> {
    /// Insert a task owned by `user_id`.
    pub async fn insert_task(
        &self,
        user_id: i32,
        title: &str,
        completed: bool,
    ) -> Result<TaskModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PortfolioTask::insert(entity::portfolio_task::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                title: ActiveValue::Set(title.to_string()),
                completed: ActiveValue::Set(completed),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
