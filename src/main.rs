use std::process::ExitCode;

use fake_drawer::cli;
use fake_drawer::config::AppConfig;
use fake_drawer::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();

    // Held until exit so the file appender flushes everything.
    let _log_guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("logging disabled: {e:#}");
            None
        }
    };

    match cli::run_cli(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "aborted");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
