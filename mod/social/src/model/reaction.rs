use serde::{Deserialize, Serialize};

use tuiter_store::KvModel;

/// A reaction kind, seen generically by the toggle workflow.
///
/// Both kinds share the same shape and the same composite document key
/// `{userId}:{tuitId}`, so a user can hold at most one record of each kind
/// per tuit. The store operations in `service::reaction` are generic over
/// this trait.
pub trait ReactionRecord: KvModel {
    /// Kind label, used in error messages.
    const KIND: &'static str;

    /// Build a fresh, unstamped record for the pair.
    fn new(user_id: &str, tuit_id: &str) -> Self;

    fn user_id(&self) -> &str;

    fn tuit_id(&self) -> &str;
}

/// A like record (user liked a tuit). Composite key: `{userId}:{tuitId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub tuit_id: String,
    pub created_at: String,
}

/// A dislike record (user disliked a tuit). Composite key: `{userId}:{tuitId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dislike {
    pub id: String,
    pub user_id: String,
    pub tuit_id: String,
    pub created_at: String,
}

impl ReactionRecord for Like {
    const KIND: &'static str = "like";

    fn new(user_id: &str, tuit_id: &str) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            tuit_id: tuit_id.to_string(),
            created_at: String::new(),
        }
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn tuit_id(&self) -> &str {
        &self.tuit_id
    }
}

impl ReactionRecord for Dislike {
    const KIND: &'static str = "dislike";

    fn new(user_id: &str, tuit_id: &str) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            tuit_id: tuit_id.to_string(),
            created_at: String::new(),
        }
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn tuit_id(&self) -> &str {
        &self.tuit_id
    }
}
