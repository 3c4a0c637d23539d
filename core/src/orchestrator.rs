//! # Scan Orchestrator
//!
//! Runs the [`DomainScanner`] over one or many domains and merges the results.
//!
//! In list mode every domain becomes its own task, but a semaphore lets at most
//! `workers` of them scan at a time. Results are merged by the single loop that
//! joins the tasks, in completion order.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::error;
use zonesnatcher_common::domain::TargetDomain;

use crate::scanner::DomainScanner;

/// Called with the number of finished domains after each one completes.
pub type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

pub struct ScanOrchestrator {
    scanner: DomainScanner,
    workers: NonZeroUsize,
}

impl ScanOrchestrator {
    pub fn new(scanner: DomainScanner, workers: NonZeroUsize) -> Self {
        Self { scanner, workers }
    }

    pub async fn scan_single(&self, domain: &TargetDomain) -> Vec<String> {
        self.scanner.scan_domain(domain.as_str()).await
    }

    /// Scans all `domains` with bounded concurrency.
    ///
    /// A domain that leaks nothing, or whose task dies, simply adds nothing.
    pub async fn scan_many(
        &self,
        domains: Vec<TargetDomain>,
        on_domain_done: Option<ProgressCallback>,
    ) -> Vec<String> {
        let permits = Arc::new(Semaphore::new(self.workers.get()));
        let mut tasks: JoinSet<Vec<String>> = JoinSet::new();

        for domain in domains {
            let scanner: DomainScanner = self.scanner.clone();
            let permits: Arc<Semaphore> = permits.clone();

            tasks.spawn(async move {
                // The semaphore is never closed, so acquiring only fails if that changes.
                let Ok(_permit) = permits.acquire_owned().await else {
                    return Vec::new();
                };
                scanner.scan_domain(domain.as_str()).await
            });
        }

        let mut results: Vec<String> = Vec::new();
        let mut done: usize = 0;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(records) => results.extend(records),
                Err(e) => error!("Domain scan task failed: {e}"),
            }

            done += 1;
            if let Some(callback) = &on_domain_done {
                callback(done);
            }
        }

        results
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
