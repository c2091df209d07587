use std::path::{Path, PathBuf};

const DIRECTORY_MARK: &str = "[DR] ";
const INDENT: char = '\t';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

impl EntryKind {
    /// Symlinks and special files are listed like files and never descended.
    pub fn is_directory(self) -> bool {
        self == EntryKind::Directory
    }
}

/// One item of a raw directory listing, as returned by a [`crate::fs::FileSystem`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// A directory or file retained in an explored tree, with its depth below the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    depth: usize,
}

impl TreeEntry {
    pub fn new(fs_entry: FsEntry, depth: usize) -> Self {
        Self {
            path: fs_entry.path,
            name: fs_entry.name,
            kind: fs_entry.kind,
            depth,
        }
    }

    pub fn root(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: crate::root_display_name(path),
            kind: EntryKind::Directory,
            depth: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Tab indentation per level, the directory mark, then the bare name.
    pub fn display_line(&self) -> String {
        let mark = if self.is_directory() { DIRECTORY_MARK } else { "" };
        let mut line = String::with_capacity(self.depth + mark.len() + self.name.len());
        line.extend(std::iter::repeat_n(INDENT, self.depth));
        line.push_str(mark);
        line.push_str(&self.name);
        line
    }
}
