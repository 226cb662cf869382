use std::io;

use anyhow::Result;
use clap::Parser;

use template_downloader::cli::Cli;
use template_downloader::logging;
use template_downloader::{Downloader, TEMPLATES};

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.runner_config()?;

    let downloader = Downloader::new(&config)?;

    let stdout = io::stdout();
    downloader.run(TEMPLATES, &mut stdout.lock())?;

    Ok(())
}

fn main() {
    logging::init_logging();

    if let Err(err) = run() {
        eprintln!("template-downloader error: {:#}", err);
        std::process::exit(1);
    }
}
