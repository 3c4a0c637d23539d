use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Public recursive resolvers queried when none are given on the command line.
pub const DEFAULT_RESOLVERS: [IpAddr; 4] = [
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
    IpAddr::V4(Ipv4Addr::new(8, 8, 4, 4)),
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
    IpAddr::V4(Ipv4Addr::new(1, 0, 0, 1)),
];

pub const DEFAULT_WORKERS: NonZeroUsize = NonZeroUsize::new(5).unwrap();
pub const DNS_PORT: u16 = 53;

/// Matches the resolver library's own per-query default.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Scan settings, built once at startup and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream recursive resolvers for NS, A and AAAA lookups.
    pub resolvers: Vec<IpAddr>,
    /// Number of domains scanned concurrently in list mode.
    pub workers: NonZeroUsize,
    /// Port the AXFR request is sent to on each name server.
    pub transfer_port: u16,
    /// Bound on each network step (lookup, connect, read).
    pub query_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolvers: DEFAULT_RESOLVERS.to_vec(),
            workers: DEFAULT_WORKERS,
            transfer_port: DNS_PORT,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl Config {
    /// Replaces the default upstreams, keeping them when `resolvers` is empty.
    pub fn with_resolvers(mut self, resolvers: Vec<IpAddr>) -> Self {
        if !resolvers.is_empty() {
            self.resolvers = resolvers;
        }
        self
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
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
