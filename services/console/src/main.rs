use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use console::session;
use matching_engine::MatchingEngine;
use types::ids::CurrencyPair;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Interactive order book for a single currency pair", long_about = None)]
struct Cli {
    /// Traded pair in BASE/QUOTE form
    #[arg(short, long, default_value = "UAH/USD")]
    market: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Diagnostics go to stderr; stdout carries only the session transcript
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pair = CurrencyPair::try_new(&cli.market)
        .with_context(|| format!("invalid market '{}', expected BASE/QUOTE", cli.market))?;

    tracing::info!(market = %pair, "Starting order book console");

    let mut engine = MatchingEngine::new(pair);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut engine, stdin.lock(), &mut stdout.lock())?;

    tracing::info!("Session ended");
    Ok(())
}
