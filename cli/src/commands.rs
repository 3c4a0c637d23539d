pub mod scan;

use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use zonesnatcher_common::config::Config;
use zonesnatcher_common::domain::TargetDomain;

#[derive(Parser, Debug)]
#[command(name = "zonesnatcher", version)]
#[command(about = "DNS zone transfer vulnerability scanner.")]
pub struct CommandLine {
    /// Target domain to check for zone transfer
    #[arg(short, long)]
    pub domain: Option<TargetDomain>,

    /// File with target domains to check, one per line
    #[arg(short, long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Save results to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of domains checked concurrently
    #[arg(short, long, value_name = "N", default_value = "5")]
    pub threads: NonZeroUsize,

    /// Upstream resolver to use instead of the public defaults (repeatable)
    #[arg(short, long = "resolver", value_name = "IP")]
    pub resolvers: Vec<IpAddr>,

    /// Show debug output, including refused transfers
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,
}

/// What the invocation asks for. A single domain wins over a list.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanMode {
    Single(TargetDomain),
    List(PathBuf),
    Usage,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> ScanMode {
        match (&self.domain, &self.list) {
            (Some(domain), _) => ScanMode::Single(domain.clone()),
            (None, Some(path)) => ScanMode::List(path.clone()),
            (None, None) => ScanMode::Usage,
        }
    }

    pub fn config(&self) -> Config {
        Config::default()
            .with_resolvers(self.resolvers.clone())
            .with_workers(self.threads)
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
