use anyhow::{Context, Result};
use portrait_fetch::{logging, Downloader, DEFAULT_BASE_DIR};

fn run() -> Result<()> {
    let downloader = Downloader::new(DEFAULT_BASE_DIR);

    downloader
        .run_all()
        .with_context(|| format!("downloading portraits into {}", DEFAULT_BASE_DIR))?;

    Ok(())
}

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("portrait-fetch error: {:#}", err);
        std::process::exit(1);
    }

    if let Err(err) = run() {
        eprintln!("portrait-fetch error: {:#}", err);
        std::process::exit(1);
    }
}
