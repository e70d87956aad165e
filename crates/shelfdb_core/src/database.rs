//! Database facade.

use crate::collection::Collection;
use crate::config::Config;
use crate::dir::DirManager;
use crate::entity::Entity;
use crate::error::{CoreError, CoreResult};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// The main database handle.
///
/// `Database` is the entry point for interacting with ShelfDB: a
/// directory-existence check plus construction over a [`DirManager`].
/// Collection files live as direct children of the root folder, which
/// is created on first open when missing.
///
/// # Opening a Database
///
/// ```rust,ignore
/// use shelfdb_core::Database;
///
/// let db = Database::open("my_data").await?;
/// let mut users = db.collection::<User>().await?;
/// users.push(User::new("Alice"));
/// users.write().await?;
/// ```
///
/// The database holds no locks and performs no coordination: collection
/// instances are independent in-memory snapshots, and callers own the
/// single-writer discipline per collection.
#[derive(Debug)]
pub struct Database {
    /// Directory manager over the root folder.
    dir: DirManager,
}

impl Database {
    /// Opens a database at `path`, creating the root folder if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but is not a directory, or
    /// on I/O failure while creating the folder.
    pub async fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        Self::open_with_config(path, Config::default()).await
    }

    /// Opens a database at `path` with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DirectoryNotFound`] if the root folder is
    /// missing and `create_if_missing` is false, and
    /// [`CoreError::NotADirectory`] if the path exists but is a file.
    pub async fn open_with_config(path: impl AsRef<Path>, config: Config) -> CoreResult<Self> {
        let path = path.as_ref();

        match fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(CoreError::NotADirectory {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !config.create_if_missing {
                    return Err(CoreError::DirectoryNotFound {
                        path: path.to_path_buf(),
                    });
                }
                fs::create_dir_all(path).await?;
                info!(path = %path.display(), "created database root");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            dir: DirManager::new(path),
        })
    }

    /// Returns the root folder path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.root()
    }

    /// Returns the directory manager.
    #[must_use]
    pub fn dir(&self) -> &DirManager {
        &self.dir
    }

    /// Gets or creates the collection for `T`, loading it into memory.
    pub async fn collection<T: Entity>(&self) -> CoreResult<Collection<T>> {
        self.dir.get_or_create::<T>().await
    }

    /// Lists the collection names present in the root folder.
    pub async fn collection_names(&self) -> CoreResult<Vec<String>> {
        self.dir.list_collections().await
    }

    /// Deletes a collection file. Returns whether a deletion occurred.
    pub async fn drop_collection(&self, name: &str) -> CoreResult<bool> {
        self.dir.drop_collection(name).await
    }

    /// Empties a collection file in place without deleting it.
    /// Returns whether a purge occurred.
    pub async fn purge(&self, name: &str) -> CoreResult<bool> {
        self.dir.purge(name).await
    }

    /// Empties every collection file. Returns the number purged.
    pub async fn purge_all(&self) -> CoreResult<usize> {
        self.dir.purge_all().await
    }

    /// Duplicates a collection file under a timestamped name.
    /// Returns the copy's path, or `None` if the source is absent.
    pub async fn copy_collection(&self, name: &str) -> CoreResult<Option<PathBuf>> {
        self.dir.copy_collection(name).await
    }
}
