//! The session record.
//!
//! A session belongs to a user once login or registration stores the user's ID in it. Only the
//! ID is kept, status and admin flag are read from the database on each request so changes to
//! an account apply to sessions that are already open.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the logged in user's ID.
pub const SESSION_USER_ID_KEY: &str = "pcs:user:id";

/// ID of the user a session belongs to, stored as a plain JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Attach the session to `user_id`, replacing any previous user
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// ID of the session's user, `None` for anonymous visitors
    ///
    /// An entry that is not a user ID is a session error, not an anonymous visitor.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(user_id.map(|SessionUserId(id)| id))
    }

    /// Detach the session from its user, returning the removed ID
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .remove::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?;

        Ok(user_id.map(|SessionUserId(id)| id))
    }
}
