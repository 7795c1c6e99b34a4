use clap::Parser;
use env_logger::Env;

use mangoload::cli::Cli;
use mangoload::pipeline;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    pipeline::run(&cli)?;
    Ok(())
}
