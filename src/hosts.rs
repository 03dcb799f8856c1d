//! Hosts file document: load, lookup, edit, delete, save.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result, Violation};
use crate::line::{Line, Mapping};
use crate::platform::{FileStorage, HostsStorage, IpSyntax, StdIpSyntax};

/// Effective host -> IP binding (the first match in document order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub host: String,
    pub ip: String,
}

/// An ordered hosts file owned by the caller. Every successful mutation
/// is written back to storage before it returns.
pub struct HostsFile {
    lines: Vec<Line>,
    storage: Box<dyn HostsStorage>,
    ip_syntax: Box<dyn IpSyntax>,
}

impl fmt::Debug for HostsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostsFile")
            .field("location", &self.storage.location())
            .field("lines", &self.lines)
            .finish()
    }
}

impl HostsFile {
    /// Load the hosts file at `path`. With `strict`, duplicate host bindings
    /// and unparsed non-comment rows fail the load.
    pub fn load(path: impl AsRef<Path>, strict: bool) -> Result<Self> {
        Self::load_from(
            Box::new(FileStorage::new(path.as_ref())),
            Box::new(StdIpSyntax),
            strict,
        )
    }

    /// Load from any storage, with a custom IP syntax check.
    pub fn load_from(
        storage: Box<dyn HostsStorage>,
        ip_syntax: Box<dyn IpSyntax>,
        strict: bool,
    ) -> Result<Self> {
        let content = storage
            .read()
            .map_err(|e| Error::storage(storage.location(), e))?;
        let lines = parse_lines(&content, ip_syntax.as_ref());
        if strict {
            if let Some(v) = strict_violations(&lines).into_iter().next() {
                return Err(Error::MalformedStrictDocument(v));
            }
        }
        Ok(Self {
            lines,
            storage,
            ip_syntax,
        })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// IP bound to `host` by the first live mapping that lists it.
    pub fn get(&self, host: &str) -> Option<&str> {
        self.live()
            .find(|m| m.contains(host))
            .map(|m| m.ip.as_str())
    }

    pub fn exists(&self, host: &str) -> bool {
        self.get(host).is_some()
    }

    /// Every live host once, with the IP it resolves to, in document order.
    pub fn bindings(&self) -> Vec<Binding> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for m in self.live() {
            for host in &m.hosts {
                if seen.insert(host.as_str()) {
                    out.push(Binding {
                        host: host.clone(),
                        ip: m.ip.clone(),
                    });
                }
            }
        }
        out
    }

    /// Make `host` resolve to `ip` and persist. Calling it again with the
    /// same arguments does not touch storage.
    pub fn edit(&mut self, host: &str, ip: &str) -> Result<()> {
        validate_host(host)?;
        if !self.ip_syntax.is_ip_literal(ip) {
            return Err(Error::InvalidIp(ip.to_string()));
        }

        let mut moved = false;
        let mut settled = false;
        for m in self.lines.iter_mut().filter_map(Line::mapping_mut) {
            if !m.contains(host) {
                continue;
            }
            if m.ip == ip {
                if !moved {
                    debug!(host, ip, "binding already present");
                    return Ok(());
                }
                debug!(host, ip, "binding present after leaving shared lines");
                settled = true;
                break;
            }
            if m.hosts.len() > 1 {
                // Co-resident hosts keep the old IP.
                debug!(host, from = %m.ip, "moving host out of shared line");
                m.hosts.shift_remove(host);
                moved = true;
            } else {
                debug!(host, from = %m.ip, to = ip, "rebinding line in place");
                m.ip = ip.to_string();
                settled = true;
                break;
            }
        }
        if settled {
            return self.save();
        }

        let attached = match self
            .lines
            .iter_mut()
            .filter_map(Line::mapping_mut)
            .find(|m| m.ip == ip)
        {
            Some(m) => {
                debug!(host, ip, "attaching host to existing line");
                m.hosts.insert(host.to_string());
                true
            }
            None => false,
        };
        if attached {
            return self.save();
        }

        // Prepend so the new binding shadows stale duplicates further down.
        debug!(host, ip, "prepending new line");
        self.lines.insert(0, Line::Mapping(Mapping::new(ip, host)));
        self.save()
    }

    /// Remove every live binding of `host` and persist. Returns whether
    /// anything was removed; an absent host is not an error and skips the write.
    pub fn delete(&mut self, host: &str) -> Result<bool> {
        let mut touched = 0usize;
        self.lines.retain_mut(|line| match line.mapping_mut() {
            Some(m) => {
                if m.hosts.shift_remove(host) {
                    touched += 1;
                }
                !m.hosts.is_empty()
            }
            None => true,
        });
        debug!(host, touched, "delete");
        if touched == 0 {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Render the whole document, one newline-terminated row per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }

    /// Overwrite storage with the rendered document.
    pub fn save(&self) -> Result<()> {
        self.storage
            .write(&self.render())
            .map_err(|e| Error::storage(self.storage.location(), e))
    }

    fn live(&self) -> impl Iterator<Item = &Mapping> {
        self.lines.iter().filter_map(Line::mapping)
    }
}

/// Parse raw content into lines; blank rows are dropped.
pub fn parse_lines(content: &str, ip_syntax: &dyn IpSyntax) -> Vec<Line> {
    content
        .lines()
        .filter_map(|row| Line::parse(row, ip_syntax))
        .collect()
}

/// All strict-mode findings in document order: unparsed non-comment rows,
/// and every repeat of a host already bound by an earlier live line.
pub fn strict_violations(lines: &[Line]) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let entry = i + 1;
        match line {
            Line::Comment(_) => {}
            Line::Passthrough(text) => out.push(Violation::Unparsed {
                text: text.clone(),
                entry,
            }),
            Line::Mapping(m) => {
                for host in &m.hosts {
                    if !seen.insert(host.as_str()) {
                        out.push(Violation::DuplicateHost {
                            host: host.clone(),
                            entry,
                        });
                    }
                }
            }
        }
    }
    out
}

/// A host must survive a save/reload cycle as a single host token.
pub fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() || host.starts_with('#') || host.chars().any(char::is_whitespace) {
        return Err(Error::InvalidHost(host.to_string()));
    }
    Ok(())
}
