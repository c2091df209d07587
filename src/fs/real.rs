use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::FileType;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

fn classify(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            let listing = std::fs::read_dir(&dir)
                .with_context(|| format!("cannot read directory {}", dir.display()))?;
            for entry in listing {
                let entry =
                    entry.with_context(|| format!("cannot list {}", dir.display()))?;
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .with_context(|| format!("cannot stat {}", path.display()))?;

                // Links to directories are descended; broken links stay symlinks
                let kind = match classify(file_type) {
                    EntryKind::Symlink if std::fs::metadata(&path).is_ok_and(|m| m.is_dir()) => {
                        EntryKind::Directory
                    }
                    kind => kind,
                };

                entries.push(FsEntry {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn kind_of(&self, path: &Path) -> Result<Option<EntryKind>> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => Ok(Some(classify(metadata.file_type()))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("cannot stat {}", path.display()))
            }
        }
    }

    async fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>> {
        match tokio::fs::canonicalize(path).await {
            Ok(resolved) => Ok(Some(resolved)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("cannot resolve {}", path.display()))
            }
        }
    }
}
