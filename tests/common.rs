//! Shared test helpers.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use hostsedit::platform::{HostsStorage, StdIpSyntax};
use hostsedit::HostsFile;
use tempfile::TempDir;

/// Create a temp directory for use as HOSTSEDIT_HOME or to hold a hosts file.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostsedit_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Write `content` to `<dir>/hosts` and return its path.
pub fn write_hosts(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}

#[derive(Default)]
struct MemoryState {
    content: String,
    writes: usize,
    fail_writes: bool,
}

/// In-memory storage that records writes; clones share state.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new(content: &str) -> Self {
        let storage = Self::default();
        storage.state.lock().unwrap().content = content.to_string();
        storage
    }

    pub fn content(&self) -> String {
        self.state.lock().unwrap().content.clone()
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn open(&self, strict: bool) -> hostsedit::Result<HostsFile> {
        HostsFile::load_from(Box::new(self.clone()), Box::new(StdIpSyntax), strict)
    }
}

impl HostsStorage for MemoryStorage {
    fn read(&self) -> io::Result<String> {
        Ok(self.content())
    }

    fn write(&self, content: &str) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        state.content = content.to_string();
        state.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
