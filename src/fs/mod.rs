mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Direct children of `dir`, in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Kind of the node at `path` with symlinks followed, or `None` if nothing is there.
    async fn kind_of(&self, path: &Path) -> Result<Option<EntryKind>>;

    /// Absolute form of `path` with `.`, `..` and symlinks resolved, or `None` if nothing is there.
    async fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>>;
}
