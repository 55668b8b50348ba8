//! GSD CLI - Command line tool for aggregating the green states dashboard datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gsd-cli",
    version,
    about = "EV, solar and water summaries for U.S. states"
)]
struct Cli {
    #[command(subcommand)]
    command: gsd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gsd_cmd::run(cli.command)
}
