//! Social module — tuits, reactions, follows, bookmarks, messages.
//!
//! # Resources
//!
//! - **User** — account with credentials and profile fields
//! - **Tuit** — short post with embedded like/dislike counters
//! - **Like / Dislike** — reaction records, one per (user, tuit) pair
//! - **Follow** — directed user-to-user edge
//! - **Bookmark** — user-to-tuit edge
//! - **Message** — direct message between two users
//!
//! The only stateful workflow is the reaction toggle (see
//! `service::reaction`); everything else is thin CRUD over the document
//! store.
//!
//! # Usage
//!
//! ```ignore
//! use social::{SocialModule, service::SocialConfig};
//!
//! let module = SocialModule::new(kv, SocialConfig::default());
//! let router = module.routes(); // Merge into the app router.
//! ```

pub mod api;
pub mod jwt;
pub mod model;
pub mod service;
mod store_impls;

use std::sync::Arc;

use axum::Router;

use tuiter_core::Module;

use crate::service::{SocialConfig, SocialService};

/// Social module implementing the Module trait.
///
/// Holds the SocialService and provides HTTP routes for all endpoints.
pub struct SocialModule {
    service: Arc<SocialService>,
}

impl SocialModule {
    /// Create a new SocialModule over a shared KV store.
    pub fn new(kv: Arc<dyn tuiter_kv::KVStore>, config: SocialConfig) -> Self {
        let service = Arc::new(SocialService::new(kv, config));
        Self { service }
    }

    /// Get a reference to the underlying SocialService.
    pub fn service(&self) -> &Arc<SocialService> {
        &self.service
    }
}

impl Module for SocialModule {
    fn name(&self) -> &str {
        "social"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
