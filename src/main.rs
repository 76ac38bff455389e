use anyhow::Result;
use languages_by_country::{config, pipeline};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout only carries the confirmation line)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("languages_by_country=info".parse()?),
        )
        .init();

    info!("Starting languages-by-country regroup");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    let summary = pipeline::run(&config)?;

    info!(
        "Regrouped {} records into {} entries ({} duplicates overwritten)",
        summary.records, summary.entries, summary.overwritten
    );
    println!("Transformed data written to {}", summary.output_file.display());

    Ok(())
}
