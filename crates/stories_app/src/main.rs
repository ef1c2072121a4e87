mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    platform::run_app(cli.into_config())
}
