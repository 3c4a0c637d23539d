//! # Scan Target Model
//!
//! A target is a domain name as typed by the user. It is only trimmed and
//! checked for emptiness; anything else is left for the resolver to reject.

use std::fmt;
use std::str::FromStr;

/// A user-supplied domain to check for open zone transfers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetDomain(String);

impl TargetDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err("domain must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses a domain list: one domain per line, blank lines skipped.
pub fn parse_list(contents: &str) -> Vec<TargetDomain> {
    contents
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect()
}

/// Builds the leaked name for a zone node, e.g. `www` + `example.com`.
pub fn zone_record(node: &str, domain: &str) -> String {
    format!("{node}.{domain}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
