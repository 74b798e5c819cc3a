//! bookgen - static book generator

use std::process::ExitCode;

use clap::Parser;

use bookgen::BookConfig;

#[derive(Parser)]
#[command(name = "bookgen")]
#[command(version, about = "Static book generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    bookgen book.json              Build the book described by book.json
    bookgen --quiet book.json      Build without progress output")]
struct Cli {
    /// Book configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    config: String,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str) -> bookgen::Result<()> {
    let config = BookConfig::load(config_path)?;
    bookgen::generate(&config)
}
