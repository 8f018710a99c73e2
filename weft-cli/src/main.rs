//! Weft CLI - Literate Programming Weaver

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

use weft::config;

#[derive(Parser)]
#[command(name = "weft")]
#[command(author, version, about = "Weaves source code out of literate markdown", long_about = None)]
struct Cli {
    /// Glob patterns naming input markdown files
    #[arg(value_name = "GLOB", required = true)]
    globs: Vec<String>,

    /// Write output files into this directory instead of alongside the inputs
    #[arg(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Read configuration from file or use defaults
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match cli.config {
        Some(ref path) => config::read_config_file(path).unwrap_or_default(),
        None => config::read_config(&base_dir).unwrap_or_default(),
    };

    let options = commands::WeaveOptions {
        globs: cli.globs,
        dir: cli.dir,
    };

    match commands::weave(&config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
