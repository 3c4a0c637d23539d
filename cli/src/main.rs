mod commands;
mod files;
mod terminal;

use commands::{CommandLine, scan};
use zonesnatcher_common::config::Config;

use crate::terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::banner(commands.no_banner);

    let cfg: Config = commands.config();
    scan::scan(commands.mode(), commands.output.as_deref(), &cfg).await?;

    print::end_of_program();
    Ok(())
}
