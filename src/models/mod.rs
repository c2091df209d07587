mod entry;
mod tree;

pub use entry::{EntryKind, FsEntry, TreeEntry};
pub use tree::DirTree;
