//! # Name Server Discovery
//!
//! Finds the authoritative name servers of a domain.

use tracing::debug;
use zonesnatcher_common::dns::{DnsClient, NameServers};

/// Returns the NS hostnames of `domain`.
///
/// An empty set means the domain cannot be checked; the set has no defined order.
pub async fn discover_name_servers(client: &dyn DnsClient, domain: &str) -> NameServers {
    let name_servers: NameServers = client.resolve_ns(domain).await;
    debug!("{domain}: {} name server(s) discovered", name_servers.len());
    name_servers
}
