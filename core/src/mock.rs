use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use zonesnatcher_common::dns::{DnsClient, NameServers, TransferError};

/// In-memory DNS used by the scanner tests.
///
/// Transfers succeed only for `(address, domain)` pairs registered with
/// [`MockDns::with_zone`]; everything else is refused.
#[derive(Default)]
pub struct MockDns {
    name_servers: HashMap<String, Vec<String>>,
    addresses: HashMap<String, IpAddr>,
    zones: HashMap<(IpAddr, String), Vec<String>>,
    delay: Option<Duration>,
    transfers: AtomicUsize,
    pending_transfers: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MockDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_servers(mut self, domain: &str, name_servers: &[&str]) -> Self {
        let name_servers = name_servers.iter().map(ToString::to_string).collect();
        self.name_servers.insert(domain.to_string(), name_servers);
        self
    }

    pub fn with_address(mut self, hostname: &str, addr: &str) -> Self {
        self.addresses.insert(hostname.to_string(), addr.parse().unwrap());
        self
    }

    pub fn with_zone(mut self, addr: &str, domain: &str, nodes: &[&str]) -> Self {
        let nodes = nodes.iter().map(ToString::to_string).collect();
        self.zones.insert((addr.parse().unwrap(), domain.to_string()), nodes);
        self
    }

    /// Makes every NS lookup and every transfer take `delay`, to keep domain scans in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn transfer_calls(&self) -> usize {
        self.transfers.load(Ordering::SeqCst)
    }

    /// Highest number of domain scans that were running at the same time.
    ///
    /// A scan counts from its NS lookup until the transfer attempt on its last
    /// name server returns. Name servers without an address keep it counted.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn finish_transfer(&self, domain: &str) {
        let mut pending = self.pending_transfers.lock().unwrap();
        if let Some(left) = pending.get_mut(domain) {
            *left -= 1;
            if *left == 0 {
                pending.remove(domain);
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }
}

#[async_trait]
impl DnsClient for MockDns {
    async fn resolve_ns(&self, domain: &str) -> NameServers {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        self.pause().await;

        let name_servers: NameServers = self
            .name_servers
            .get(domain)
            .map(|servers| servers.iter().cloned().collect())
            .unwrap_or_default();
        if name_servers.is_empty() {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        } else {
            self.pending_transfers
                .lock()
                .unwrap()
                .insert(domain.to_string(), name_servers.len());
        }
        name_servers
    }

    async fn resolve_address(&self, hostname: &str) -> Option<IpAddr> {
        self.addresses.get(hostname).copied()
    }

    async fn transfer_zone(
        &self,
        server: IpAddr,
        domain: &str,
    ) -> Result<Vec<String>, TransferError> {
        self.transfers.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.finish_transfer(domain);
        self.zones
            .get(&(server, domain.to_string()))
            .cloned()
            .ok_or_else(|| TransferError::Refused("REFUSED".to_string()))
    }
}
