use clap::Parser;
use palindrome_finder::utils::logger;
use palindrome_finder::{app, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting palindrome-finder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match app::run(&config, stdin.lock(), stdout.lock()) {
        Ok(report) => {
            tracing::info!(
                "Done: {} matches in {} characters",
                report.matches,
                report.input_chars
            );
        }
        Err(e) => {
            tracing::error!(
                "Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
