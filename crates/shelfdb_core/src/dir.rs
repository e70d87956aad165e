//! Collection directory management.
//!
//! This module binds logical collections to files under one root folder:
//!
//! ```text
//! <root>/
//! ├─ users.json            # one file per collection
//! ├─ orders.json
//! └─ users_1712345678901.json   # timestamped copy (snapshot)
//! ```
//!
//! File names are the lowercased collection name plus the fixed `json`
//! extension; every collection file is a direct child of the root.

use crate::collection::Collection;
use crate::entity::Entity;
use crate::error::CoreResult;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tracing::info;

/// File extension for collection files.
const EXTENSION: &str = "json";

/// Resolves collection names to file paths and manages file lifecycle.
///
/// `DirManager` never loads collection contents into memory except via
/// [`DirManager::get_or_create`], which delegates to
/// [`Collection::load`]. All other operations are thin filesystem glue:
/// list, drop, purge, copy.
#[derive(Debug, Clone)]
pub struct DirManager {
    /// Root folder holding the collection files.
    root: PathBuf,
}

impl DirManager {
    /// Creates a manager over `root`. The folder is not created here;
    /// [`crate::Database::open`] owns root creation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root folder.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a collection name to its backing file path:
    /// `<root>/<lowercased-name>.json`.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{EXTENSION}", name.to_lowercase()))
    }

    /// Lists the collection names present in the root folder, sorted.
    ///
    /// Names are file stems of `*.json` children. A missing root folder
    /// is empty state, not an error.
    pub async fn list_collections(&self) -> CoreResult<Vec<String>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Ensures the backing file for `T` exists (creating it empty if
    /// missing), then loads it into a ready-to-use [`Collection`].
    pub async fn get_or_create<T: Entity>(&self) -> CoreResult<Collection<T>> {
        let path = self.file_path(T::NAME);

        match fs::metadata(&path).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::File::create(&path).await?;
                info!(collection = T::NAME, path = %path.display(), "created collection file");
            }
            Err(e) => return Err(e.into()),
        }

        Collection::load(path).await
    }

    /// Deletes the backing file for `name`.
    ///
    /// Returns whether a deletion occurred; an absent file is reported
    /// as `false`, not an error.
    pub async fn drop_collection(&self, name: &str) -> CoreResult<bool> {
        let path = self.file_path(name);

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(collection = name, "dropped collection");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the backing file for `name` with zero bytes, in
    /// place. The file remains (distinct from [`Self::drop_collection`]).
    ///
    /// Returns `false` without creating anything if the file is absent.
    pub async fn purge(&self, name: &str) -> CoreResult<bool> {
        let path = self.file_path(name);

        match fs::metadata(&path).await {
            Ok(_) => {
                fs::write(&path, b"").await?;
                info!(collection = name, "purged collection");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Purges every collection file in the root folder.
    ///
    /// Returns the number of files emptied.
    pub async fn purge_all(&self) -> CoreResult<usize> {
        let mut purged = 0;
        for name in self.list_collections().await? {
            if self.purge(&name).await? {
                purged += 1;
            }
        }
        Ok(purged)
    }

    /// Duplicates the backing file for `name` under
    /// `<lowercased-name>_<millis-since-epoch>.json`, a lightweight
    /// snapshot.
    ///
    /// Returns the copy's path, or `None` if the source file is absent.
    pub async fn copy_collection(&self, name: &str) -> CoreResult<Option<PathBuf>> {
        let src = self.file_path(name);

        match fs::metadata(&src).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dest = self
            .root
            .join(format!("{}_{millis}.{EXTENSION}", name.to_lowercase()));

        fs::copy(&src, &dest).await?;
        info!(collection = name, copy = %dest.display(), "copied collection");
        Ok(Some(dest))
    }
}
