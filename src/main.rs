use std::process::ExitCode;

use tracing::Level;

mod cli;
mod harden;

fn init_logging() {
    // stdout carries the password line only; diagnostics go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    harden::disable_core_dumps();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&format!("Failed to write password: {e}"));
            ExitCode::FAILURE
        }
    }
}
