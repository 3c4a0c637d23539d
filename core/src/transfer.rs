//! # Zone Transfer Attempt
//!
//! One AXFR attempt against one name server. A refusal is the normal outcome and
//! is only visible at debug level; a success is reported immediately.

use std::net::IpAddr;

use tracing::debug;
use zonesnatcher_common::dns::DnsClient;
use zonesnatcher_common::domain::zone_record;
use zonesnatcher_common::finding;

/// Tries to transfer `domain` from `name_server`.
///
/// Returns the leaked names (`<node>.<domain>`) in zone order, or `None` when the
/// server could not be resolved or did not allow the transfer.
pub async fn attempt_transfer(
    client: &dyn DnsClient,
    name_server: &str,
    domain: &str,
) -> Option<Vec<String>> {
    let address: IpAddr = client.resolve_address(name_server).await?;

    let nodes: Vec<String> = match client.transfer_zone(address, domain).await {
        Ok(nodes) => nodes,
        Err(e) => {
            debug!("{domain}: no transfer from {name_server} ({address}): {e}");
            return None;
        }
    };

    let records: Vec<String> = nodes
        .iter()
        .map(|node| zone_record(node, domain))
        .collect();

    report_finding(domain, name_server, address, &records);
    Some(records)
}

fn report_finding(domain: &str, name_server: &str, address: IpAddr, records: &[String]) {
    let mut report: String = format!(
        "Vulnerability detected: Zone transfer successful for {domain} via {name_server} ({address})"
    );
    for record in records {
        report.push_str("\n    ");
        report.push_str(record);
    }
    finding!("{report}");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
