//! # Domain Scanner
//!
//! Checks one domain end to end: discover its name servers, then try a zone
//! transfer against each of them in turn.

use std::sync::Arc;

use tracing::info;
use zonesnatcher_common::dns::{DnsClient, NameServers};

use crate::discovery::discover_name_servers;
use crate::transfer::attempt_transfer;

/// Scans a single domain. Cheap to clone; clones share the same DNS client.
#[derive(Clone)]
pub struct DomainScanner {
    client: Arc<dyn DnsClient>,
}

impl DomainScanner {
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self { client }
    }

    /// Returns every name leaked by any of the domain's name servers.
    ///
    /// Name servers are tried one after another in the (unordered) discovery set.
    /// Records from several vulnerable servers are concatenated, duplicates included.
    pub async fn scan_domain(&self, domain: &str) -> Vec<String> {
        info!("Checking {domain} for zone transfer vulnerability...");

        let name_servers: NameServers = discover_name_servers(self.client.as_ref(), domain).await;
        let mut records: Vec<String> = Vec::new();

        for name_server in &name_servers {
            if let Some(found) = attempt_transfer(self.client.as_ref(), name_server, domain).await {
                records.extend(found);
            }
        }

        records
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
