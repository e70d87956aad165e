//! Whole-file read and write with tiered buffering and cancellation.

use crate::buffer::buffer_size_for;
use crate::cancel::CancelFlag;
use crate::error::StorageResult;
use std::io;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

fn check(cancel: Option<&CancelFlag>) -> StorageResult<()> {
    match cancel {
        Some(flag) => flag.check(),
        None => Ok(()),
    }
}

/// Reads the full contents of `path`.
///
/// The read buffer is sized from the file's current length via
/// [`buffer_size_for`]. Partial reads from the OS are tolerated; the
/// loop continues until end of file. The cancel flag is checked between
/// chunks, and the file handle is closed before this returns on every
/// path.
///
/// # Errors
///
/// Returns `StorageError::Io` if the path is inaccessible and
/// `StorageError::Cancelled` if `cancel` fires mid-read.
pub async fn read_file(path: &Path, cancel: Option<&CancelFlag>) -> StorageResult<Vec<u8>> {
    check(cancel)?;

    let len = fs::metadata(path).await?.len();
    let chunk = buffer_size_for(len);

    let mut file = fs::File::open(path).await?;
    let mut data = Vec::with_capacity(len as usize);
    let mut buf = vec![0u8; chunk];

    loop {
        check(cancel)?;
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    debug!(path = %path.display(), bytes = data.len(), chunk, "read file");
    Ok(data)
}

/// Overwrites `path` with `data` (truncate-then-write, not append).
///
/// The write buffer is sized from the file's size before truncation, or
/// the smallest tier if the file does not exist. Data is written in
/// buffer-sized chunks with a cancel check between chunks, then flushed.
/// The handle is closed before this returns on every path; there is no
/// partial-write recovery if the process dies mid-write.
///
/// # Errors
///
/// Returns `StorageError::Io` on disk errors and
/// `StorageError::Cancelled` if `cancel` fires mid-write.
pub async fn write_file(path: &Path, data: &[u8], cancel: Option<&CancelFlag>) -> StorageResult<()> {
    check(cancel)?;

    let existing = match fs::metadata(path).await {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
        Err(e) => return Err(e.into()),
    };
    let chunk = buffer_size_for(existing);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await?;

    for part in data.chunks(chunk) {
        check(cancel)?;
        file.write_all(part).await?;
    }
    file.flush().await?;

    debug!(path = %path.display(), bytes = data.len(), chunk, "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_file(&path, b"hello world", None).await.unwrap();
        let data = read_file(&path, None).await.unwrap();
        assert_eq!(&data, b"hello world");
    }

    #[tokio::test]
    async fn roundtrip_larger_than_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");

        // Several 4 KiB chunks plus a remainder.
        let data: Vec<u8> = (0..20_000).map(|i| (i % 251) as u8).collect();
        write_file(&path, &data, None).await.unwrap();
        let read = read_file(&path, None).await.unwrap();
        assert_eq!(read, data);
    }

    #[tokio::test]
    async fn write_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        write_file(&path, b"a much longer original payload", None)
            .await
            .unwrap();
        write_file(&path, b"short", None).await.unwrap();

        let data = read_file(&path, None).await.unwrap();
        assert_eq!(&data, b"short");
    }

    #[tokio::test]
    async fn write_empty_leaves_zero_length_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");

        write_file(&path, b"content", None).await.unwrap();
        write_file(&path, b"", None).await.unwrap();

        assert_eq!(fs::metadata(&path).await.unwrap().len(), 0);
        let data = read_file(&path, None).await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn read_missing_file_fails_with_io() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.bin");

        let result = read_file(&path, None).await;
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn cancelled_read_aborts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        write_file(&path, b"payload", None).await.unwrap();

        let flag = CancelFlag::new();
        flag.cancel();

        let result = read_file(&path, Some(&flag)).await;
        assert!(matches!(result, Err(StorageError::Cancelled)));
    }

    #[tokio::test]
    async fn cancelled_write_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never.bin");

        let flag = CancelFlag::new();
        flag.cancel();

        let result = write_file(&path, b"payload", Some(&flag)).await;
        assert!(matches!(result, Err(StorageError::Cancelled)));
        assert!(!path.exists());
    }
}
