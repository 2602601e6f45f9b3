pub mod bookmark;
pub mod follow;
pub mod message;
pub mod reaction;
pub mod tuit;
pub mod user;

use std::sync::Arc;

use tuiter_kv::KVStore;
use tuiter_store::KvOps;

use crate::jwt::JwtService;
use crate::model::*;

/// Configuration for the social service.
#[derive(Debug, Clone)]
pub struct SocialConfig {
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Bearer token lifetime in seconds (default: 24h).
    pub token_ttl: i64,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "tuiter-dev-secret-change-me".to_string(),
            token_ttl: 86400, // 24h
        }
    }
}

/// The social service — one typed ops handle per collection, plus the JWT
/// service used for identity resolution.
///
/// Constructed once at startup and shared via `Arc`; no global state.
pub struct SocialService {
    pub(crate) users: KvOps<User>,
    pub(crate) tuits: KvOps<Tuit>,
    pub(crate) likes: KvOps<Like>,
    pub(crate) dislikes: KvOps<Dislike>,
    pub(crate) follows: KvOps<Follow>,
    pub(crate) bookmarks: KvOps<Bookmark>,
    pub(crate) messages: KvOps<Message>,
    pub(crate) jwt: JwtService,
}

impl SocialService {
    /// Create a new SocialService over a shared KV store.
    pub fn new(kv: Arc<dyn KVStore>, config: SocialConfig) -> Self {
        Self {
            users: KvOps::new(kv.clone()),
            tuits: KvOps::new(kv.clone()),
            likes: KvOps::new(kv.clone()),
            dislikes: KvOps::new(kv.clone()),
            follows: KvOps::new(kv.clone()),
            bookmarks: KvOps::new(kv.clone()),
            messages: KvOps::new(kv),
            jwt: JwtService::new(&config.jwt_secret, config.token_ttl),
        }
    }

    /// JWT service for token verification at the HTTP layer.
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
