//! Platform abstraction for hosts file storage and IP syntax.

use std::fs;
use std::io::Write;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

#[cfg(not(windows))]
const SYSTEM_HOSTS_FILE: &str = "/etc/hosts";

#[cfg(windows)]
const SYSTEM_HOSTS_FILE: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// Env var that points every default lookup at another hosts file (e.g. in tests).
pub const HOSTS_FILE_ENV: &str = "HOSTSEDIT_HOSTS_FILE";

/// Trait for reading and overwriting the backing hosts content.
pub trait HostsStorage: Send + Sync {
    /// Read the full raw content.
    fn read(&self) -> std::io::Result<String>;
    /// Replace the full content. Not atomic: a failure may leave it truncated.
    fn write(&self, content: &str) -> std::io::Result<()>;
    /// Human-readable location, used in error messages.
    fn location(&self) -> String;
}

/// Trait answering "is this token a syntactically valid IP literal?".
pub trait IpSyntax: Send + Sync {
    fn is_ip_literal(&self, token: &str) -> bool;
}

/// IPv4 and IPv6 literals as accepted by `std::net::IpAddr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdIpSyntax;

impl IpSyntax for StdIpSyntax {
    fn is_ip_literal(&self, token: &str) -> bool {
        token.parse::<IpAddr>().is_ok()
    }
}

/// HostsStorage backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostsStorage for FileStorage {
    fn read(&self) -> std::io::Result<String> {
        // Comments are often in a legacy code page; keep them readable.
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, content: &str) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Get the hosts file path for this platform.
/// If HOSTSEDIT_HOSTS_FILE is set (e.g. in tests), that path wins.
pub fn default_hosts_path() -> PathBuf {
    if let Some(path) = std::env::var_os(HOSTS_FILE_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(SYSTEM_HOSTS_FILE)
}
