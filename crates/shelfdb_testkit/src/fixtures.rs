//! Test fixtures and database helpers.
//!
//! Provides a sample record type and convenience wrappers for setting
//! up temp-dir databases in tests.

use serde::{Deserialize, Serialize};
use shelfdb_core::{Database, Entity, EntityId};
use std::path::Path;
use tempfile::TempDir;

/// A sample record type for tests.
///
/// Carries an optional field with the omit-when-absent serde attributes
/// the `Entity` contract asks for, so fixtures exercise both the
/// compact-output and tolerant-input paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Identity.
    pub id: EntityId,
    /// Short title.
    pub title: String,
    /// Optional body text; omitted from the file when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Completion marker.
    pub done: bool,
}

impl Note {
    /// Creates a note with a fresh identity and no body.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            id: EntityId::new(),
            title: title.to_string(),
            body: None,
            done: false,
        }
    }
}

impl Entity for Note {
    const NAME: &'static str = "notes";

    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// A test database rooted in a temp directory with automatic cleanup.
pub struct TestDb {
    /// The database instance.
    pub db: Database,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TestDb {
    /// Opens a fresh database in a new temp directory.
    pub async fn open() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let db = Database::open(temp_dir.path().join("db"))
            .await
            .expect("failed to open test database");
        Self {
            db,
            _temp_dir: temp_dir,
        }
    }

    /// Opens a database pre-populated with `count` notes, already
    /// written to disk.
    pub async fn with_notes(count: usize) -> (Self, Vec<Note>) {
        let test_db = Self::open().await;
        let notes: Vec<Note> = (0..count).map(|i| Note::new(&format!("note {i}"))).collect();

        let mut collection = test_db
            .db
            .collection::<Note>()
            .await
            .expect("failed to create notes collection");
        collection.append(notes.clone());
        collection.write().await.expect("failed to write notes");

        (test_db, notes)
    }

    /// Returns the database root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.db.path()
    }
}

impl std::ops::Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_yields_empty_database() {
        let db = TestDb::open().await;
        assert!(db.collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_notes_persists_and_reloads() {
        let (db, notes) = TestDb::with_notes(5).await;

        let collection = db.collection::<Note>().await.unwrap();
        assert_eq!(collection.len(), 5);

        let loaded: Vec<Note> = collection.iter().cloned().collect();
        assert_eq!(loaded, notes);
    }

    #[test]
    fn note_identity_is_id_only() {
        let a = Note::new("same title");
        let b = Note::new("same title");
        assert!(!a.same_entity(&b));

        let mut renamed = a.clone();
        renamed.title = "other".to_string();
        assert!(a.same_entity(&renamed));
    }
}
