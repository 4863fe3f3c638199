use chrono::Utc;
use entity::portfolio_user::UserStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Values for a new account.
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password_hash: &'a str,
    pub confirmation_token: &'a str,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new unconfirmed, non-admin user
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<UserModel, DbErr> {
        let user = entity::portfolio_user::ActiveModel {
            email: ActiveValue::Set(new_user.email.to_string()),
            name: ActiveValue::Set(new_user.name.to_string()),
            password_hash: ActiveValue::Set(new_user.password_hash.to_string()),
            status: ActiveValue::Set(UserStatus::Unconfirmed),
            is_admin: ActiveValue::Set(false),
            confirmation_token: ActiveValue::Set(Some(new_user.confirmation_token.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            confirmed_at: ActiveValue::Set(None),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PortfolioUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PortfolioUser::find()
            .filter(entity::portfolio_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_confirmation_token(
        &self,
        token: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PortfolioUser::find()
            .filter(entity::portfolio_user::Column::ConfirmationToken.eq(token))
            .one(self.db)
            .await
    }

    /// Marks the user as confirmed and consumes their confirmation token
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn confirm(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.status = ActiveValue::Set(UserStatus::Confirmed);
        user_am.confirmation_token = ActiveValue::Set(None);
        user_am.confirmed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// All users ordered by ID
    pub async fn list(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::PortfolioUser::find()
            .order_by_asc(entity::portfolio_user::Column::Id)
            .all(self.db)
            .await
    }
}
