//! # Storage Layer
//!
//! The durable store is an opaque key-value service: the rest of the crate
//! only ever asks it to load, save, or remove a text blob under a well-known
//! key. The [`Persistence`] trait keeps business logic decoupled from where
//! those blobs actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under a data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! Absence of a key reads back as `None` and is equivalent to "no data";
//! callers decide what that means (an empty collection, no active session).

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract key-value persistence for the roster.
pub trait Persistence {
    /// Load the blob stored under `key`, or `None` if the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Save `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
