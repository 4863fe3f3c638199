use serde::{Deserialize, Serialize};

/// JSON body of every failed API request except the admin middleware's plain text 403
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Message safe to show to the visitor
    pub error: String,
}
