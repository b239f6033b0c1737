//! pseo CLI - Programmatic SEO page generator.
//!
//! Reads the dimension document named by `pseo.toml`, enumerates every page,
//! and replaces the output tree and sitemap with the result.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;

/// pseo - Programmatic SEO page generator.
#[derive(Parser)]
#[command(name = "pseo", version, about)]
struct Cli;

fn main() {
    Cli::parse();
    let output = Output::new();

    // RUST_LOG controls library logging; default is errors only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generated_on = chrono::Utc::now().date_naive();

    if let Err(err) = commands::generate::execute(&output, generated_on) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
