// src/bin/cli.rs
use ld_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    cli::run().map_err(|e| color_eyre::eyre::eyre!(e.to_string()))
}
