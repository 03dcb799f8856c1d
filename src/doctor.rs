//! Check command: health report for a hosts file.

use anyhow::Result;
use std::path::Path;

use crate::error::Violation;
use crate::hosts::{self, HostsFile};

/// Result of a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub ok: bool,
    pub message: String,
}

/// Run all checks against the hosts file at `path`.
pub fn run_checks(path: &Path) -> Result<Vec<CheckResult>> {
    let mut results = Vec::new();

    // 1. Readable at all; tolerant load never fails on content
    let file = match HostsFile::load(path, false) {
        Ok(f) => f,
        Err(e) => {
            results.push(CheckResult {
                ok: false,
                message: format!("Cannot read {}: {e}", path.display()),
            });
            return Ok(results);
        }
    };
    let mappings = file.lines().iter().filter(|l| l.mapping().is_some()).count();
    results.push(CheckResult {
        ok: true,
        message: format!("Read {} ({mappings} mapping line(s))", path.display()),
    });

    // 2. Everything strict mode would reject, not just the first
    let violations = hosts::strict_violations(file.lines());
    if violations.is_empty() {
        results.push(CheckResult {
            ok: true,
            message: "No duplicate hosts or unparsed lines (strict-mode clean)".to_string(),
        });
    }
    for v in violations {
        let message = match &v {
            Violation::DuplicateHost { host, .. } => format!(
                "{v}; only the first binding ({}) is honoured",
                file.get(host).unwrap_or("?")
            ),
            Violation::Unparsed { .. } => v.to_string(),
        };
        results.push(CheckResult { ok: false, message });
    }

    Ok(results)
}
