//! Resolver client backed by `hickory-resolver`.
//!
//! Lookups go to the upstream recursive resolvers from [`Config`]; zone
//! transfers go straight to the name server over TCP.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::ensure;
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use tracing::{debug, info};

use zonesnatcher_common::config::{Config, DNS_PORT};
use zonesnatcher_common::dns::{DnsClient, NameServers, TransferError};
use zonesnatcher_protocols::axfr;

pub struct HickoryClient {
    resolver: TokioResolver,
    transfer_port: u16,
    timeout: Duration,
}

impl HickoryClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        ensure!(
            !cfg.resolvers.is_empty(),
            "at least one upstream resolver is required"
        );

        let upstreams = NameServerConfigGroup::from_ips_clear(&cfg.resolvers, DNS_PORT, true);
        let resolver_cfg = ResolverConfig::from_parts(None, Vec::new(), upstreams);

        let mut opts = ResolverOpts::default();
        opts.timeout = cfg.query_timeout;

        let resolver =
            TokioResolver::builder_with_config(resolver_cfg, TokioConnectionProvider::default())
                .with_options(opts)
                .build();

        Ok(Self {
            resolver,
            transfer_port: cfg.transfer_port,
            timeout: cfg.query_timeout,
        })
    }

    async fn first_ipv4(&self, hostname: &str) -> Option<IpAddr> {
        match self.resolver.ipv4_lookup(hostname).await {
            Ok(lookup) => lookup.iter().next().map(|a| IpAddr::V4(a.0)),
            Err(e) => {
                debug!("A lookup for {hostname} failed: {e}");
                None
            }
        }
    }

    async fn first_ipv6(&self, hostname: &str) -> Option<IpAddr> {
        match self.resolver.ipv6_lookup(hostname).await {
            Ok(lookup) => lookup.iter().next().map(|aaaa| IpAddr::V6(aaaa.0)),
            Err(e) => {
                debug!("AAAA lookup for {hostname} failed: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl DnsClient for HickoryClient {
    async fn resolve_ns(&self, domain: &str) -> NameServers {
        match self.resolver.ns_lookup(domain).await {
            Ok(lookup) => lookup.iter().map(|ns| ns.0.to_utf8()).collect(),
            Err(e) => {
                debug!("NS lookup for {domain} failed: {e}");
                NameServers::new()
            }
        }
    }

    async fn resolve_address(&self, hostname: &str) -> Option<IpAddr> {
        if let Some(addr) = self.first_ipv4(hostname).await {
            return Some(addr);
        }
        if let Some(addr) = self.first_ipv6(hostname).await {
            return Some(addr);
        }
        info!("Could not resolve NS {hostname} to IP");
        None
    }

    async fn transfer_zone(
        &self,
        server: IpAddr,
        domain: &str,
    ) -> Result<Vec<String>, TransferError> {
        let addr = SocketAddr::new(server, self.transfer_port);
        axfr::transfer(addr, domain, self.timeout).await
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
