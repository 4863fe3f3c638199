use sea_orm::DatabaseConnection;

use crate::{
    model::task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    server::{
        data::task::TaskRepository,
        error::{task::TaskError, Error},
        model::db::TaskModel,
    },
};

pub const MAX_TITLE_LEN: usize = 200;

/// Service for a user's task list.
///
/// All operations take the owning user's ID, tasks of other users are reported as not found.
pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<TaskDto>, Error> {
        let tasks = TaskRepository::new(self.db).list_for_user(user_id).await?;

        Ok(tasks.into_iter().map(task_to_dto).collect())
    }

    pub async fn create(&self, user_id: i32, task: CreateTaskDto) -> Result<TaskDto, Error> {
        let title = validate_title(&task.title)?;

        let task = TaskRepository::new(self.db).create(user_id, title).await?;

        Ok(task_to_dto(task))
    }

    /// Applies a partial update
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - The updated task
    /// - `Err(TaskError::InvalidTitle)` - A new title was provided but is blank or too long
    /// - `Err(TaskError::NotFound)` - The user has no task with this ID
    pub async fn update(
        &self,
        user_id: i32,
        task_id: i32,
        update: UpdateTaskDto,
    ) -> Result<TaskDto, Error> {
        let title = update.title.as_deref().map(validate_title).transpose()?;

        let Some(task) = TaskRepository::new(self.db)
            .update(user_id, task_id, title, update.completed)
            .await?
        else {
            return Err(TaskError::NotFound(task_id).into());
        };

        Ok(task_to_dto(task))
    }

    pub async fn delete(&self, user_id: i32, task_id: i32) -> Result<(), Error> {
        let result = TaskRepository::new(self.db).delete(user_id, task_id).await?;

        if result.rows_affected == 0 {
            return Err(TaskError::NotFound(task_id).into());
        }

        Ok(())
    }
}

/// Trims a title and checks it is between 1 and [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> Result<&str, TaskError> {
    let title = title.trim();
    let len = title.chars().count();

    if len == 0 || len > MAX_TITLE_LEN {
        return Err(TaskError::InvalidTitle { max: MAX_TITLE_LEN });
    }

    Ok(title)
}

fn task_to_dto(task: TaskModel) -> TaskDto {
    TaskDto {
        id: task.id,
        title: task.title,
        completed: task.completed,
        created_at: task.created_at,
    }
}
