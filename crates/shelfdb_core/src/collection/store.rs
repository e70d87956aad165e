//! Collection store implementation.

use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use shelfdb_storage::CancelFlag;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::slice;
use tracing::debug;

/// An ordered in-memory sequence of entities bound to one file.
///
/// A `Collection<T>` is created by [`Collection::load`], mutated through
/// purely in-memory operations, and persisted with an explicit
/// [`Collection::write`]. The in-memory sequence and the on-disk content
/// may diverge until a write is issued; dropping the collection discards
/// uncommitted changes without touching disk.
///
/// The container enforces no uniqueness on identifiers: duplicate IDs
/// are possible if inserted directly, and identifier-addressed
/// operations hit only the first match.
///
/// A collection instance has a single logical owner. It carries no
/// internal synchronization, and two instances writing to the same path
/// race last-writer-wins; callers that need concurrent access must
/// coordinate externally.
///
/// # Example
///
/// ```rust,ignore
/// let mut users = Collection::<User>::load("data/users.json").await?;
/// users.push(User { id: EntityId::new(), name: "Alice".into() });
/// users.write().await?;
/// ```
#[derive(Debug)]
pub struct Collection<T: Entity> {
    /// The backing file.
    path: PathBuf,
    /// The in-memory record sequence.
    items: Vec<T>,
}

impl<T: Entity> Collection<T> {
    /// Loads a collection from `path`.
    ///
    /// A zero-length file (or a newly created one) yields an empty
    /// sequence without attempting deserialization - an empty byte
    /// stream is not a valid JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Deserialization` for malformed content (the
    /// collection is never partially populated) and a storage error if
    /// the path is inaccessible. Neither is retried or repaired.
    pub async fn load(path: impl Into<PathBuf>) -> CoreResult<Self> {
        Self::load_inner(path.into(), None).await
    }

    /// Loads a collection, aborting if `cancel` fires mid-read.
    pub async fn load_with_cancel(
        path: impl Into<PathBuf>,
        cancel: &CancelFlag,
    ) -> CoreResult<Self> {
        Self::load_inner(path.into(), Some(cancel)).await
    }

    async fn load_inner(path: PathBuf, cancel: Option<&CancelFlag>) -> CoreResult<Self> {
        let bytes = shelfdb_storage::read_file(&path, cancel).await?;

        let items: Vec<T> = if bytes.is_empty() {
            Vec::new()
        } else {
            serde_json::from_slice(&bytes).map_err(|source| CoreError::Deserialization {
                path: path.clone(),
                source,
            })?
        };

        debug!(collection = T::NAME, records = items.len(), "loaded collection");
        Ok(Self { path, items })
    }

    /// Returns the file path this collection is bound to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the records in sequence order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the first record with the given identifier, if any.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    /// Appends one record.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends many records after the existing content, preserving their
    /// relative order.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Replaces the entire in-memory contents with `items`.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Removes every record for which `pred` returns false, preserving
    /// the order of the remaining records.
    pub fn retain<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(pred);
    }

    /// Removes every record for which `pred` returns true, preserving
    /// the order of the remaining records.
    pub fn remove_where<F>(&mut self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|item| !pred(item));
    }

    /// Replaces the first record whose identifier equals `id` with
    /// `replacement`, keeping its position.
    ///
    /// Returns false and leaves the sequence unchanged if no record
    /// matches.
    pub fn update(&mut self, id: EntityId, replacement: T) -> bool {
        match self.items.iter().position(|item| item.entity_id() == id) {
            Some(index) => {
                self.items[index] = replacement;
                true
            }
            None => false,
        }
    }

    /// Removes the first record whose identifier equals `id`.
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.items.iter().position(|item| item.entity_id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first record that is the same entity as `entity`
    /// (identity equality - identifiers alone).
    ///
    /// Returns whether a removal occurred.
    pub fn remove_one(&mut self, entity: &T) -> bool {
        match self.items.iter().position(|item| item.same_entity(entity)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empties the in-memory sequence without touching disk.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Applies `f` to every record in sequence order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(f);
    }

    /// Produces an identifier-to-record snapshot of the current
    /// contents. If duplicate identifiers exist (a caller error), the
    /// last occurrence wins.
    #[must_use]
    pub fn to_map(&self) -> HashMap<EntityId, T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .map(|item| (item.entity_id(), item.clone()))
            .collect()
    }

    /// Serializes the in-memory sequence and fully overwrites the
    /// backing file (truncate-then-write, not append).
    ///
    /// This is the only operation that writes to disk; every mutation
    /// stays in memory until a write is issued. The encoding is compact
    /// JSON; optional fields that are `None` are omitted by the record
    /// type's serde attributes.
    ///
    /// Two collections writing to the same path race last-writer-wins;
    /// this is unsupported and undetected.
    ///
    /// # Errors
    ///
    /// Disk errors surface as storage errors and are not retried; a
    /// crash mid-write can leave a truncated file.
    pub async fn write(&self) -> CoreResult<()> {
        self.write_inner(None).await
    }

    /// Writes the collection, aborting if `cancel` fires mid-write.
    ///
    /// Cancellation provides no guarantee about bytes already flushed.
    pub async fn write_with_cancel(&self, cancel: &CancelFlag) -> CoreResult<()> {
        self.write_inner(Some(cancel)).await
    }

    async fn write_inner(&self, cancel: Option<&CancelFlag>) -> CoreResult<()> {
        let bytes = serde_json::to_vec(&self.items).map_err(CoreError::Serialization)?;
        shelfdb_storage::write_file(&self.path, &bytes, cancel).await?;

        debug!(collection = T::NAME, records = self.items.len(), "wrote collection");
        Ok(())
    }

    /// Clears the in-memory sequence, then immediately writes, emptying
    /// the collection both in memory and on disk.
    pub async fn clear_and_write(&mut self) -> CoreResult<()> {
        self.items.clear();
        self.write().await
    }
}
