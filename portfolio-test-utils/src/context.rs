//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database and a session backed by an in-memory store,
//! enough to exercise repositories, services and controllers without external services.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_APP_URL, error::TestError, model::UserModel};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_user_tables()
///     .with_user("user@example.com", UserStatus::Confirmed)
///     .build()
///     .await?;
///
/// let user = &test.users[0];
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for exercising login flows
    pub session: Session,
    /// Users inserted by the builder, in declaration order
    pub users: Vec<UserModel>,
}

impl TestContext {
    /// Convert the database connection into the application's state type.
    ///
    /// Keeps the test utilities free of a dependency on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), TEST_APP_URL.to_string()))
    }

    /// Replace the session with a fresh, empty one sharing no state with the previous one.
    pub fn reset_session(&mut self) {
        self.session = new_session();
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session: new_session(),
            users: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

fn new_session() -> Session {
    let store = Arc::new(MemoryStore::default());
    Session::new(None, store, None)
}
