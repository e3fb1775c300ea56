use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::warn;

use insta_collector::credentials::{Credentials, PASSWORD_VAR, USERNAME_VAR};
use insta_collector::{env_file, scraper};

/// Collect recent image posts and comments for a list of Instagram accounts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load credentials from this env file instead of searching the working
    /// directory and its parents
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => env_file::load_from(path)?,
        None => {
            env_file::load();
        }
    }

    let credentials = Credentials::from_env();
    if !credentials.is_complete() {
        warn!(
            "{} or {} is not set; logging in with empty credentials",
            USERNAME_VAR, PASSWORD_VAR
        );
    }

    println!(
        "Collecting up to {} image posts per account listed in {}",
        scraper::MAX_ITEMS,
        scraper::USER_LIST
    );

    let status = scraper::run_collection(&credentials)?;
    if !status.success() {
        process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
