use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::NameFilter;
use crate::fs::FileSystem;
use crate::models::{DirTree, EntryKind, TreeEntry};

#[derive(Error, Debug)]
pub enum ExploreError {
    #[error("{} does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("cannot explore {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ExploreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::RootNotFound(path)
            | Self::RootNotADirectory(path)
            | Self::Traversal { path, .. } => path,
        }
    }
}

/// Configuration options for directory exploration.
#[derive(Debug, Clone, Default)]
pub struct ExploreOptions {
    /// Drop directories with no retained file anywhere below them
    pub exclude_empty_dirs: bool,
    /// Only keep files whose name contains this text, ignoring case
    pub name_contains: Option<String>,
}

/// Canonical path of `root`, checked to be an existing directory.
///
/// Errors name `root` as given when it cannot be resolved.
pub async fn resolve_root<F: FileSystem>(
    fs: &F,
    root: &Path,
) -> Result<PathBuf, ExploreError> {
    let resolved = fs
        .canonicalize(root)
        .await
        .map_err(|source| ExploreError::Traversal {
            path: root.to_path_buf(),
            source,
        })?
        .ok_or_else(|| ExploreError::RootNotFound(root.to_path_buf()))?;
    check_root(fs, &resolved).await?;
    Ok(resolved)
}

async fn check_root<F: FileSystem>(fs: &F, root: &Path) -> Result<(), ExploreError> {
    let root_kind = fs
        .kind_of(root)
        .await
        .map_err(|source| ExploreError::Traversal {
            path: root.to_path_buf(),
            source,
        })?;
    match root_kind {
        None => Err(ExploreError::RootNotFound(root.to_path_buf())),
        Some(EntryKind::Directory) => Ok(()),
        Some(_) => Err(ExploreError::RootNotADirectory(root.to_path_buf())),
    }
}

/// Explore the tree rooted at `root`.
///
/// The root is checked before any listing: it must exist and be a directory.
/// The returned tree always starts with the root entry at depth 0. Siblings are
/// ordered by name. Any listing failure below the root aborts the exploration.
pub async fn explore_dir_tree<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &ExploreOptions,
) -> Result<DirTree, ExploreError> {
    check_root(fs, root).await?;

    let name_filter = NameFilter::new(options.name_contains.as_deref());

    let mut entries = vec![TreeEntry::root(root)];
    entries.extend(
        explore_children(fs, root, options.exclude_empty_dirs, &name_filter, 1).await?,
    );

    Ok(DirTree::new(entries))
}

/// Entries for everything below `dir`, children at `depth`.
async fn explore_children<F: FileSystem>(
    fs: &F,
    dir: &Path,
    exclude_empty_dirs: bool,
    name_filter: &NameFilter,
    depth: usize,
) -> Result<Vec<TreeEntry>, ExploreError> {
    let mut children = fs
        .read_dir(dir)
        .await
        .map_err(|source| ExploreError::Traversal {
            path: dir.to_path_buf(),
            source,
        })?;
    debug!(dir = %dir.display(), count = children.len(), "listed directory");

    children.sort_by(|a, b| a.name.cmp(&b.name));

    let mut entries = Vec::new();
    for child in children {
        if child.kind != EntryKind::Directory {
            if name_filter.matches(&child.name) {
                entries.push(TreeEntry::new(child, depth));
            }
            continue;
        }

        let subtree = Box::pin(explore_children(
            fs,
            &child.path,
            exclude_empty_dirs,
            name_filter,
            depth + 1,
        ))
        .await?;

        if exclude_empty_dirs && subtree.is_empty() {
            debug!(dir = %child.path.display(), "pruned empty directory");
            continue;
        }

        entries.push(TreeEntry::new(child, depth));
        entries.extend(subtree);
    }

    Ok(entries)
}
