//! Entity trait for storable record types.

use crate::entity::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for types that can be stored in a ShelfDB collection.
///
/// An entity is an opaque serde payload plus one capability: a stable,
/// externally-immutable unique identifier. The store only ever inspects
/// the identifier; all other fields belong to the application.
///
/// Identity defines equality. Two records are the same entity iff their
/// IDs are equal - use [`Entity::same_entity`] or compare
/// [`Entity::entity_id`] values directly. The store never consults a
/// `PartialEq` impl on the record type.
///
/// Optional fields should carry
/// `#[serde(skip_serializing_if = "Option::is_none")]` so absent values
/// are omitted from the collection file; `Option` fields tolerate
/// absence on input without further attributes.
///
/// # Example
///
/// ```rust,ignore
/// use serde::{Deserialize, Serialize};
/// use shelfdb_core::{Entity, EntityId};
///
/// #[derive(Serialize, Deserialize)]
/// struct User {
///     id: EntityId,
///     name: String,
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     email: Option<String>,
/// }
///
/// impl Entity for User {
///     const NAME: &'static str = "users";
///
///     fn entity_id(&self) -> EntityId {
///         self.id
///     }
/// }
/// ```
pub trait Entity: Serialize + DeserializeOwned {
    /// Logical collection name for this record type.
    ///
    /// Lowercased to form the backing file name, so `"User"` and
    /// `"user"` resolve to the same file.
    const NAME: &'static str;

    /// Returns the entity's stable, immutable identifier.
    ///
    /// This ID must not change over the entity's lifetime.
    fn entity_id(&self) -> EntityId;

    /// Returns true if `other` is the same entity, by identifier alone.
    fn same_entity(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}
