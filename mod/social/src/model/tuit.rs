use serde::{Deserialize, Serialize};

/// A tuit (short post).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuit {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Id of the authoring user.
    pub posted_by: String,

    /// Post body, at most 280 characters.
    pub content: String,

    /// Denormalized counters, recomputed from the reaction records on every
    /// toggle.
    #[serde(default)]
    pub stats: TuitStats,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Counters embedded in the tuit document for fast reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitStats {
    #[serde(default)]
    pub replies: u32,
    #[serde(default)]
    pub retuits: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

/// Input for creating a new tuit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTuit {
    pub content: String,
}
