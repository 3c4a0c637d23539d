//! Defines the contract between the scan logic and whatever answers DNS queries.
//!
//! Every method folds the expected DNS failures into a "no data" outcome so the
//! scanner never branches on response codes. Only the zone transfer keeps the
//! reason, as a [`TransferError`], for diagnostics.

use std::collections::HashSet;
use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

/// Authoritative name server hostnames for a domain.
///
/// Iteration order is unspecified and may differ between runs.
pub type NameServers = HashSet<String>;

#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Looks up the NS records of `domain`. Any failure yields an empty set.
    async fn resolve_ns(&self, domain: &str) -> NameServers;

    /// Resolves `hostname` to its first A address, falling back to the first AAAA.
    ///
    /// Returns `None` when neither lookup produced an answer.
    async fn resolve_address(&self, hostname: &str) -> Option<IpAddr>;

    /// Requests a full transfer of `domain` from `server`.
    ///
    /// On success returns the zone's node names relative to the origin,
    /// in the order the transfer delivered them.
    async fn transfer_zone(&self, server: IpAddr, domain: &str)
    -> Result<Vec<String>, TransferError>;
}

/// Why a zone transfer produced no data.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("invalid zone name '{zone}': {reason}")]
    InvalidZone { zone: String, reason: String },

    #[error("could not connect to {server}: {source}")]
    Connect {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out waiting for the server")]
    Timeout,

    #[error("transfer refused ({0})")]
    Refused(String),

    #[error("malformed transfer: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TransferError {
    pub fn malformed(reason: impl ToString) -> Self {
        Self::Malformed(reason.to_string())
    }
}
