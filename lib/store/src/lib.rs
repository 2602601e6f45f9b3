//! Typed document storage over the KV layer.
//!
//! A model implements [`KvModel`] to declare its key prefix, how its key is
//! derived, and lifecycle hooks. CRUD operations are provided by [`KvOps`].
//!
//! ```ignore
//! impl KvModel for User {
//!     fn kv_prefix() -> &'static str { "social:user:" }
//!     fn key_value(&self) -> String { self.id.clone() }
//!     fn before_create(&mut self) { /* stamp id + timestamps */ }
//! }
//! ```

pub mod kv;

pub use kv::{KvModel, KvOps};
