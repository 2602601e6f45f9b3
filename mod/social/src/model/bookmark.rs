use serde::{Deserialize, Serialize};

/// A bookmark (user saved a tuit). Composite key: `{userId}:{tuitId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub tuit_id: String,
    pub created_at: String,
}
