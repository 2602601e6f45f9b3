//! KvModel implementations for social models.
//!
//! Defines kv_prefix, key derivation, and hooks for each model.

use tuiter_core::{new_id, now_rfc3339};
use tuiter_store::KvModel;

use crate::model::*;

// ── User ──

impl KvModel for User {
    fn kv_prefix() -> &'static str {
        "social:user:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            // Username is the identity; a second registration with the same
            // name lands on the same key and conflicts.
            self.id = self.username.clone();
        }
        let now = now_rfc3339();
        if self.created_at.is_empty() {
            self.created_at = now.clone();
        }
        self.updated_at = now;
    }

    fn before_update(&mut self) {
        self.updated_at = now_rfc3339();
    }
}

// ── Tuit ──

impl KvModel for Tuit {
    fn kv_prefix() -> &'static str {
        "social:tuit:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = new_id();
        }
        let now = now_rfc3339();
        if self.created_at.is_empty() {
            self.created_at = now.clone();
        }
        self.updated_at = now;
    }

    fn before_update(&mut self) {
        self.updated_at = now_rfc3339();
    }
}

// ── Like ──

impl KvModel for Like {
    fn kv_prefix() -> &'static str {
        "social:like:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = format!("{}:{}", self.user_id, self.tuit_id);
        }
        if self.created_at.is_empty() {
            self.created_at = now_rfc3339();
        }
    }
}

// ── Dislike ──

impl KvModel for Dislike {
    fn kv_prefix() -> &'static str {
        "social:dislike:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = format!("{}:{}", self.user_id, self.tuit_id);
        }
        if self.created_at.is_empty() {
            self.created_at = now_rfc3339();
        }
    }
}

// ── Follow ──

impl KvModel for Follow {
    fn kv_prefix() -> &'static str {
        "social:follow:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = format!("{}:{}", self.follower_id, self.followee_id);
        }
        if self.created_at.is_empty() {
            self.created_at = now_rfc3339();
        }
    }
}

// ── Bookmark ──

impl KvModel for Bookmark {
    fn kv_prefix() -> &'static str {
        "social:bookmark:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = format!("{}:{}", self.user_id, self.tuit_id);
        }
        if self.created_at.is_empty() {
            self.created_at = now_rfc3339();
        }
    }
}

// ── Message ──

impl KvModel for Message {
    fn kv_prefix() -> &'static str {
        "social:message:"
    }

    fn key_value(&self) -> String {
        self.id.clone()
    }

    fn before_create(&mut self) {
        if self.id.is_empty() {
            self.id = new_id();
        }
        if self.created_at.is_empty() {
            self.created_at = now_rfc3339();
        }
    }
}
