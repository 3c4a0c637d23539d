//! Zone transfer scan pipeline.
//!
//! Data flows from the [`orchestrator`] through the per-domain [`scanner`],
//! which uses [`discovery`] and [`transfer`] on top of a
//! [`DnsClient`](zonesnatcher_common::dns::DnsClient) such as the
//! [`resolver::HickoryClient`].

pub mod discovery;
pub mod orchestrator;
pub mod resolver;
pub mod scanner;
pub mod transfer;

#[cfg(test)]
mod mock;
