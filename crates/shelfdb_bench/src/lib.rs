//! Shared helpers for ShelfDB benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
