//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data that maintains
//! required invariants (fresh identities, valid collection names).

use crate::fixtures::Note;
use proptest::prelude::*;
use shelfdb_core::EntityId;

/// Strategy for generating entity IDs.
pub fn entity_id_strategy() -> impl Strategy<Value = EntityId> {
    prop::array::uniform16(any::<u8>()).prop_map(EntityId::from_bytes)
}

/// Strategy for generating valid collection names.
pub fn collection_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,31}").expect("invalid regex")
}

/// Strategy for generating a single note.
pub fn note_strategy() -> impl Strategy<Value = Note> {
    (
        entity_id_strategy(),
        "[ -~]{0,40}",
        prop::option::of("[ -~]{0,200}"),
        any::<bool>(),
    )
        .prop_map(|(id, title, body, done)| Note {
            id,
            title,
            body,
            done,
        })
}

/// Strategy for generating up to `max` notes.
pub fn notes_strategy(max: usize) -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec(note_strategy(), 0..=max)
}
