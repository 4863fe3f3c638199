use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::TaskModel;

/// Repository for task list entries.
///
/// Every query is scoped by the owning user's ID, a task belonging to another user behaves as
/// if it does not exist.
pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Tasks of a user, oldest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<TaskModel>, DbErr> {
        entity::prelude::PortfolioTask::find()
            .filter(entity::portfolio_task::Column::UserId.eq(user_id))
            .order_by_asc(entity::portfolio_task::Column::CreatedAt)
            .order_by_asc(entity::portfolio_task::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(&self, user_id: i32, title: &str) -> Result<TaskModel, DbErr> {
        let now = Utc::now().naive_utc();
        let task = entity::portfolio_task::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        task_id: i32,
    ) -> Result<Option<TaskModel>, DbErr> {
        entity::prelude::PortfolioTask::find_by_id(task_id)
            .filter(entity::portfolio_task::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies the provided changes, `None` leaves a field untouched
    ///
    /// Returns `Ok(None)` if the user has no task with this ID.
    pub async fn update(
        &self,
        user_id: i32,
        task_id: i32,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Option<TaskModel>, DbErr> {
        let Some(task) = self.get_for_user(user_id, task_id).await? else {
            return Ok(None);
        };

        let mut task_am = task.into_active_model();
        if let Some(title) = title {
            task_am.title = ActiveValue::Set(title.to_string());
        }
        if let Some(completed) = completed {
            task_am.completed = ActiveValue::Set(completed);
        }
        task_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let task = task_am.update(self.db).await?;

        Ok(Some(task))
    }

    /// Deletes a task
    ///
    /// Returns OK regardless of the task existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, user_id: i32, task_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PortfolioTask::delete_many()
            .filter(entity::portfolio_task::Column::Id.eq(task_id))
            .filter(entity::portfolio_task::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
