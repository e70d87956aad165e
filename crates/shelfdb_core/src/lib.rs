//! # ShelfDB Core
//!
//! Core collection persistence engine for ShelfDB.
//!
//! ShelfDB stores each logical collection of typed records as a single
//! JSON file: the file is loaded wholesale into memory, mutated through
//! simple in-memory operations, and flushed back on demand. Nothing is
//! persisted until an explicit write.
//!
//! This crate provides:
//! - [`EntityId`] and the [`Entity`] trait - the identity model
//! - [`Collection`] - the in-memory record container with load/write
//! - [`DirManager`] - collection-name-to-file-path resolution and file
//!   lifecycle (list, drop, purge, copy)
//! - [`Database`] - the open-database entry point
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shelfdb_core::{Database, Entity, EntityId};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     id: EntityId,
//!     name: String,
//! }
//!
//! impl Entity for User {
//!     const NAME: &'static str = "users";
//!     fn entity_id(&self) -> EntityId {
//!         self.id
//!     }
//! }
//!
//! let db = Database::open("my_data").await?;
//! let mut users = db.collection::<User>().await?;
//! users.push(User { id: EntityId::new(), name: "Alice".into() });
//! users.write().await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod database;
mod dir;
mod entity;
mod error;

pub use collection::Collection;
pub use config::Config;
pub use database::Database;
pub use dir::DirManager;
pub use entity::{Entity, EntityId};
pub use error::{CoreError, CoreResult};

// Re-exported so callers can cancel in-flight loads and writes without
// depending on the storage crate directly.
pub use shelfdb_storage::CancelFlag;
