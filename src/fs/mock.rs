use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

/// Serves canned listings. A path with a listing (or a listing error) is a
/// directory; paths registered with `set_file` are files; anything else is missing.
/// Known paths canonicalize to themselves.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    files: HashSet<PathBuf>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into());
    }

    /// Directories that were listed, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn kind_of(&self, path: &Path) -> Result<Option<EntryKind>> {
        let inner = self.inner.lock().expect("mock fs lock");
        if inner.responses.contains_key(path) {
            Ok(Some(EntryKind::Directory))
        } else if inner.files.contains(path) {
            Ok(Some(EntryKind::File))
        } else {
            Ok(None)
        }
    }

    async fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>> {
        let inner = self.inner.lock().expect("mock fs lock");
        let known = inner.responses.contains_key(path) || inner.files.contains(path);
        Ok(known.then(|| path.to_path_buf()))
    }
}
