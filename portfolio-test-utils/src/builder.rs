//! Declarative test setup.

use entity::portfolio_user::UserStatus;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
///
/// Configuration methods queue work which is executed in order by `build()`: tables are
/// created first, then user fixtures are inserted.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    // (email, status, is_admin)
    users: Vec<(String, UserStatus, bool)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Create the user and task tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Create the table for a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a non-admin user with the given status.
    ///
    /// Requires `with_user_tables`. The user's password is [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD).
    pub fn with_user(mut self, email: impl Into<String>, status: UserStatus) -> Self {
        self.users.push((email.into(), status, false));
        self
    }

    /// Insert a confirmed admin user.
    pub fn with_admin(mut self, email: impl Into<String>) -> Self {
        self.users.push((email.into(), UserStatus::Confirmed, true));
        self
    }

    /// Create all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PortfolioUser),
                schema.create_table_from_entity(entity::prelude::PortfolioTask),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (email, status, is_admin) in self.users {
            let user = context
                .user()
                .insert_user_with(&email, status, is_admin)
                .await?;
            context.users.push(user);
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
