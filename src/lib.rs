pub mod cli;
pub mod explore;
pub mod fs;
pub mod models;
pub mod output;

use std::path::Path;

pub use explore::{
    ExploreError, ExploreOptions, explore_dir_tree, resolve_root, write_dir_tree,
};
pub use models::{DirTree, EntryKind, TreeEntry};

/// Final component of `root_path`, or the whole path when it has none (e.g. `/`).
pub fn root_display_name(root_path: &Path) -> String {
    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}
