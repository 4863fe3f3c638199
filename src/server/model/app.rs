use sea_orm::DatabaseConnection;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Public base URL of the site, used to build links sent to users
    pub app_url: String,
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, app_url): (DatabaseConnection, String)) -> Self {
        Self { db, app_url }
    }
}
