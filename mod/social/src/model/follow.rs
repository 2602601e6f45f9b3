use serde::{Deserialize, Serialize};

/// A follow edge (follower follows followee).
/// Composite key: `{followerId}:{followeeId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub id: String,
    pub follower_id: String,
    pub followee_id: String,
    pub created_at: String,
}
