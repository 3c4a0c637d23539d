#![cfg(test)]
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use zonesnatcher_common::config::Config;
use zonesnatcher_common::dns::{DnsClient, NameServers, TransferError};
use zonesnatcher_common::domain::{self, TargetDomain};
use zonesnatcher_core::orchestrator::ScanOrchestrator;
use zonesnatcher_core::resolver::HickoryClient;
use zonesnatcher_core::scanner::DomainScanner;
use zonesnatcher_protocols::axfr;

use crate::server::{AuthoritativeServer, LOOPBACK, zone};

const TIMEOUT: Duration = Duration::from_secs(3);

/// Answers NS and address lookups from a table, but performs real AXFRs
/// against the local server.
struct LocalDns {
    name_servers: HashMap<String, Vec<String>>,
    addresses: HashMap<String, IpAddr>,
    transfer_port: u16,
}

impl LocalDns {
    fn new(transfer_port: u16) -> Self {
        Self {
            name_servers: HashMap::new(),
            addresses: HashMap::new(),
            transfer_port,
        }
    }

    fn delegate(mut self, domain: &str, name_server: &str, addr: Option<IpAddr>) -> Self {
        self.name_servers
            .entry(domain.to_string())
            .or_default()
            .push(name_server.to_string());
        if let Some(addr) = addr {
            self.addresses.insert(name_server.to_string(), addr);
        }
        self
    }
}

#[async_trait]
impl DnsClient for LocalDns {
    async fn resolve_ns(&self, domain: &str) -> NameServers {
        self.name_servers
            .get(domain)
            .map(|servers| servers.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn resolve_address(&self, hostname: &str) -> Option<IpAddr> {
        self.addresses.get(hostname).copied()
    }

    async fn transfer_zone(
        &self,
        server: IpAddr,
        domain: &str,
    ) -> Result<Vec<String>, TransferError> {
        axfr::transfer(SocketAddr::new(server, self.transfer_port), domain, TIMEOUT).await
    }
}

fn orchestrator(dns: LocalDns, workers: usize) -> ScanOrchestrator {
    let scanner = DomainScanner::new(Arc::new(dns));
    ScanOrchestrator::new(scanner, NonZeroUsize::new(workers).unwrap())
}

#[tokio::test]
async fn single_domain_leaks_every_node() {
    let server = AuthoritativeServer::start(vec![("example.com", zone("example.com", &["www", "mail"]))])
        .await
        .unwrap();
    let dns = LocalDns::new(server.port()).delegate("example.com", "ns1.example.com", Some(LOOPBACK));

    let target: TargetDomain = "example.com".parse().unwrap();
    let records = orchestrator(dns, 5).scan_single(&target).await;

    assert_eq!(
        records,
        vec!["@.example.com", "www.example.com", "mail.example.com"]
    );
}

#[tokio::test]
async fn refusing_server_leaks_nothing() {
    let server = AuthoritativeServer::start(Vec::new()).await.unwrap();
    let dns = LocalDns::new(server.port()).delegate("example.com", "ns1.example.com", Some(LOOPBACK));

    let target: TargetDomain = "example.com".parse().unwrap();
    let scan = orchestrator(dns, 5);
    assert!(scan.scan_single(&target).await.is_empty());
    assert!(scan.scan_single(&target).await.is_empty());
}

#[tokio::test]
async fn unresolvable_name_server_does_not_block_the_rest() {
    let server = AuthoritativeServer::start(vec![("example.com", zone("example.com", &["vpn"]))])
        .await
        .unwrap();
    let dns = LocalDns::new(server.port())
        .delegate("example.com", "ghost.example.net", None)
        .delegate("example.com", "ns1.example.com", Some(LOOPBACK));

    let target: TargetDomain = "example.com".parse().unwrap();
    let records = orchestrator(dns, 5).scan_single(&target).await;
    assert!(records.contains(&"vpn.example.com".to_string()), "{records:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_scan_only_reports_vulnerable_domains() {
    let server = AuthoritativeServer::start(vec![("leaky.org", zone("leaky.org", &["db", "admin"]))])
        .await
        .unwrap();
    let dns = LocalDns::new(server.port())
        .delegate("a.com", "ns.a.com", Some(LOOPBACK))
        .delegate("b.com", "ns.b.com", Some(LOOPBACK))
        .delegate("leaky.org", "ns1.leaky.org", Some(LOOPBACK));

    let domains = domain::parse_list("a.com\n\nb.com\nleaky.org\nnowhere.test\n");
    let mut records = orchestrator(dns, 2).scan_many(domains, None).await;
    records.sort();

    assert_eq!(
        records,
        vec!["@.leaky.org", "admin.leaky.org", "db.leaky.org"]
    );
}

#[tokio::test]
async fn list_scan_of_safe_domains_is_empty() {
    let server = AuthoritativeServer::start(Vec::new()).await.unwrap();
    let dns = LocalDns::new(server.port())
        .delegate("a.com", "ns.a.com", Some(LOOPBACK))
        .delegate("b.com", "ns.b.com", Some(LOOPBACK));

    let domains = domain::parse_list("a.com\nb.com");
    assert!(orchestrator(dns, 5).scan_many(domains, None).await.is_empty());
}

#[tokio::test]
async fn hickory_client_transfers_from_configured_port() {
    let server = AuthoritativeServer::start(vec![("example.com", zone("example.com", &["www"]))])
        .await
        .unwrap();
    let cfg = Config {
        transfer_port: server.port(),
        query_timeout: TIMEOUT,
        ..Config::default()
    };
    let client = HickoryClient::new(&cfg).unwrap();

    let nodes = client.transfer_zone(LOOPBACK, "example.com").await.unwrap();
    assert_eq!(nodes, vec!["@", "www"]);

    let refused = client.transfer_zone(LOOPBACK, "other.com").await;
    assert!(matches!(refused, Err(TransferError::Refused(_))), "{refused:?}");
}

#[tokio::test]
#[ignore]
async fn public_training_zone_is_vulnerable() {
    let client = HickoryClient::new(&Config::default()).unwrap();
    let scanner = DomainScanner::new(Arc::new(client));

    let records = scanner.scan_domain("zonetransfer.me").await;
    assert!(records.iter().any(|r| r == "www.zonetransfer.me"), "{records:?}");
}
