//! One row of a hosts file: comment, IP mapping, or opaque passthrough.

use std::fmt;

use indexmap::IndexSet;

use crate::platform::IpSyntax;

/// `<ip> <host> [<host> ...]`. Hosts are a set kept in the order first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub ip: String,
    pub hosts: IndexSet<String>,
}

impl Mapping {
    pub fn new(ip: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hosts: IndexSet::from([host.into()]),
        }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    /// Recognise `<ip> <host>...`: at least two tokens, the first an IP literal.
    fn recognise(text: &str, ip_syntax: &dyn IpSyntax) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let ip = tokens.next()?;
        if !ip_syntax.is_ip_literal(ip) {
            return None;
        }
        let hosts: IndexSet<String> = tokens.map(String::from).collect();
        if hosts.is_empty() {
            return None;
        }
        Some(Self {
            ip: ip.to_string(),
            hosts,
        })
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ip)?;
        for host in &self.hosts {
            write!(f, " {host}")?;
        }
        Ok(())
    }
}

/// What follows the `#` of a comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentBody {
    /// A commented-out mapping, e.g. `# 10.0.0.1 staging`.
    Mapping(Mapping),
    /// Free text (possibly empty).
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Ignored by lookups and strict validation.
    Comment(CommentBody),
    Mapping(Mapping),
    /// A non-comment row that is not an IP mapping, kept verbatim.
    Passthrough(String),
}

impl Line {
    /// Parse one raw row. Blank rows yield `None`.
    pub fn parse(row: &str, ip_syntax: &dyn IpSyntax) -> Option<Self> {
        let row = row.trim();
        if row.is_empty() {
            return None;
        }
        if let Some(rest) = row.strip_prefix('#') {
            let rest = rest.trim();
            let body = match Mapping::recognise(rest, ip_syntax) {
                Some(m) => CommentBody::Mapping(m),
                None => CommentBody::Text(rest.to_string()),
            };
            return Some(Line::Comment(body));
        }
        Some(match Mapping::recognise(row, ip_syntax) {
            Some(m) => Line::Mapping(m),
            None => Line::Passthrough(row.to_string()),
        })
    }

    /// The mapping of a live (non-comment) row.
    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            Line::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Line::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Line::Comment(_))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Comment(CommentBody::Mapping(m)) => write!(f, "# {m}"),
            Line::Comment(CommentBody::Text(text)) => write!(f, "# {text}"),
            Line::Mapping(m) => write!(f, "{m}"),
            Line::Passthrough(raw) => f.write_str(raw),
        }
    }
}
