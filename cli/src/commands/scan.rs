use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{Instrument, Span, error, warn};
use zonesnatcher_common::config::Config;
use zonesnatcher_common::domain::TargetDomain;
use zonesnatcher_common::success;
use zonesnatcher_core::orchestrator::ScanOrchestrator;
use zonesnatcher_core::resolver::HickoryClient;
use zonesnatcher_core::scanner::DomainScanner;

use crate::commands::ScanMode;
use crate::files;
use crate::terminal::{print, progress};

pub async fn scan(mode: ScanMode, output: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let (results, domain_count): (Vec<String>, usize) = match mode {
        ScanMode::Usage => {
            warn!("No valid options provided. Use -d for a single domain or -l for a list.");
            return Ok(());
        }
        ScanMode::Single(domain) => {
            let orchestrator: ScanOrchestrator = build_orchestrator(cfg)?;
            print_settings(cfg, domain.as_str());
            print::header("checking for zone transfers");
            (orchestrator.scan_single(&domain).await, 1)
        }
        ScanMode::List(path) => {
            let orchestrator: ScanOrchestrator = build_orchestrator(cfg)?;
            let domains: Vec<TargetDomain> = files::load_domains(&path);
            let domain_count: usize = domains.len();
            print_settings(cfg, &format!("{} ({domain_count} domains)", path.display()));
            print::header("checking for zone transfers");
            (scan_list(&orchestrator, domains).await, domain_count)
        }
    };

    scan_ends(&results, domain_count, start_time.elapsed());

    if let Some(path) = output {
        if !results.is_empty() {
            save_results(path, &results);
        }
    }
    Ok(())
}

fn build_orchestrator(cfg: &Config) -> anyhow::Result<ScanOrchestrator> {
    let client = Arc::new(HickoryClient::new(cfg)?);
    Ok(ScanOrchestrator::new(DomainScanner::new(client), cfg.workers))
}

async fn scan_list(orchestrator: &ScanOrchestrator, domains: Vec<TargetDomain>) -> Vec<String> {
    let span: Span = progress::list_scan_span(domains.len());
    let on_domain_done = progress::report_to(&span);
    orchestrator
        .scan_many(domains, Some(on_domain_done))
        .instrument(span)
        .await
}

fn print_settings(cfg: &Config, target: &str) {
    let resolvers: String = cfg
        .resolvers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ");

    print::header("scan settings");
    print::aligned_lines(&[
        ("Target", target.to_string()),
        ("Resolvers", resolvers),
        ("Workers", cfg.workers.to_string()),
    ]);
}

fn scan_ends(results: &[String], domain_count: usize, total_time: Duration) {
    if results.is_empty() {
        print::header("zero leaks detected");
        print::no_results();
    } else {
        print::header("leaked names");
        print::as_tree(results);
    }
    print::summary(results.len(), domain_count, total_time);
}

fn save_results(path: &Path, results: &[String]) {
    match files::write_results(path, results) {
        Ok(()) => success!("Results saved to {}", path.display()),
        Err(e) => error!("{e:#}"),
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
