//! # ShelfDB Storage
//!
//! Buffered file I/O layer for ShelfDB.
//!
//! This crate provides the lowest-level disk abstraction for ShelfDB.
//! It is **byte-oriented** - it reads and writes whole files without
//! interpreting their contents.
//!
//! ## Design Principles
//!
//! - Whole-file reads and writes; ShelfDB owns all format interpretation
//! - Read/write buffers are sized from a tiered table keyed by file size
//! - File handles live for exactly one call: opened, used, flushed and
//!   closed before the call returns, on every path
//! - Operations accept an optional [`CancelFlag`] checked between chunks
//!
//! ## Example
//!
//! ```no_run
//! use shelfdb_storage::{read_file, write_file};
//! use std::path::Path;
//!
//! # async fn demo() -> shelfdb_storage::StorageResult<()> {
//! write_file(Path::new("data.json"), b"[]", None).await?;
//! let bytes = read_file(Path::new("data.json"), None).await?;
//! assert_eq!(&bytes, b"[]");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod cancel;
mod error;
mod file;

pub use buffer::buffer_size_for;
pub use cancel::CancelFlag;
pub use error::{StorageError, StorageResult};
pub use file::{read_file, write_file};
