mod cli;

use clap::Parser;
use perfstats_core::PerfstatsError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the table.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    tracing::info!(path = %config.input_path.display(), "rendering report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match perfstats_core::generate_report(&config, &mut out) {
        Ok(summary) => {
            tracing::info!(
                rendered = summary.rendered,
                skipped = summary.skipped,
                "report complete"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Process exit status for a failed run. Code 2 is left to clap for usage
/// errors.
fn exit_code(err: &PerfstatsError) -> i32 {
    match err {
        PerfstatsError::Data { .. } => 3,
        PerfstatsError::Parse { .. } => 4,
        PerfstatsError::Io(_) => 1,
    }
}
