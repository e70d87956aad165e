//! Benchmark data builders.

use shelfdb_testkit::Note;

/// Builds `count` notes with deterministic titles.
#[must_use]
pub fn sample_notes(count: usize) -> Vec<Note> {
    (0..count).map(|i| Note::new(&format!("note {i}"))).collect()
}

/// Builds a payload of `size` patterned bytes.
#[must_use]
pub fn patterned_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}
