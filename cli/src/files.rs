//! Reading the domain list and writing results.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use tracing::error;
use zonesnatcher_common::domain::{self, TargetDomain};

pub fn read_domains(path: &Path) -> io::Result<Vec<TargetDomain>> {
    let contents: String = fs::read_to_string(path)?;
    Ok(domain::parse_list(&contents))
}

/// Reads the domain list, reporting any failure and falling back to an empty list.
pub fn load_domains(path: &Path) -> Vec<TargetDomain> {
    match read_domains(path) {
        Ok(domains) => domains,
        Err(e) => {
            match e.kind() {
                io::ErrorKind::NotFound => error!("File {} not found", path.display()),
                io::ErrorKind::PermissionDenied => {
                    error!("Permission denied for file {}", path.display())
                }
                _ => error!("Could not read {}: {e}", path.display()),
            }
            Vec::new()
        }
    }
}

/// Writes one record per line, replacing any existing file.
pub fn write_results(path: &Path, records: &[String]) -> anyhow::Result<()> {
    let mut contents: String = String::new();
    for record in records {
        contents.push_str(record);
        contents.push('\n');
    }
    fs::write(path, contents).with_context(|| format!("Error writing to {}", path.display()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
