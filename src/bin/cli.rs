// src/bin/cli.rs
use color_eyre::eyre::eyre;
use timetable_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    cli::run().map_err(|e| eyre!("{e}"))
}
