//! neodb CLI binary.

use anyhow::Result;
use neodb::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results.
    // Example: RUST_LOG=neodb=debug,neodb_formats=debug neodb query --limit 5
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("neodb=info,neodb_formats=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting neodb CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("neodb CLI completed successfully");
    Ok(())
}
