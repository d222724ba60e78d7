use anyhow::{Context, Result};
use behave_rerun::cli::output::{format_attempt, format_run_result, style, INFO};
use behave_rerun::cli::{usage_exit_code, Cli};
use behave_rerun::{RetryRunner, SubprocessExecutor};
use std::io::Write;
use tracing::{error, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(&e);
            e.print().context("Failed to print usage")?;
            std::process::exit(code);
        }
    };

    // Initialize logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = cli.run_config();
    eprintln!(
        "{}Running {} with up to {} retries",
        INFO,
        style(&config.suite).bold(),
        style(config.max_retries).cyan()
    );

    let executor = SubprocessExecutor::new(config.runner.timeout_secs);
    let runner = RetryRunner::new(executor);
    let summary = runner
        .run(&config)
        .await
        .with_context(|| format!("Failed to run suite {}", config.suite))?;

    eprintln!();
    for attempt in &summary.attempts {
        eprintln!("  {}", format_attempt(attempt));
    }
    eprintln!("{}", format_run_result(&summary));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if !summary.passed() {
        error!(
            "Tests failed even after {} retry attempts",
            config.max_retries
        );
    }
    std::io::stdout().flush().context("Failed to flush stdout")?;
    std::process::exit(summary.exit_code());
}
