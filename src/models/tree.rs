use super::TreeEntry;

/// Entries in depth-first order. The root comes first and every directory
/// precedes the entries of its subtree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirTree {
    entries: Vec<TreeEntry>,
}

impl DirTree {
    pub(crate) fn new(entries: Vec<TreeEntry>) -> Self {
        Self { entries }
    }

    pub fn root(&self) -> Option<&TreeEntry> {
        self.entries.first()
    }

    /// Everything below the root.
    pub fn descendants(&self) -> &[TreeEntry] {
        self.entries.get(1..).unwrap_or_default()
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
