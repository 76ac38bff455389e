use crate::config::Config;
use crate::document::{read_records, write_mapping};
use crate::error::TransformError;
use crate::regroup::regroup;
use std::path::PathBuf;
use tracing::info;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub records: usize,
    pub entries: usize,
    pub overwritten: usize,
}

/// Read the input, regroup it and write the output.
///
/// Nothing is written unless reading and regrouping both succeed.
pub fn run(config: &Config) -> Result<RunSummary, TransformError> {
    // Step 1: Read the record array
    info!("Reading records from {}", config.input_file.display());
    let records = read_records(&config.input_file)?;

    // Step 2: Regroup by key field
    info!(
        "Regrouping by '{}' (duplicates: {})",
        config.key_field, config.duplicate_keys
    );
    let regrouped = regroup(records, &config.regroup_options())?;

    if regrouped.overwritten > 0 {
        info!(
            "{} duplicate keys resolved by keeping the last record",
            regrouped.overwritten
        );
    }

    // Step 3: Write the mapping
    info!("Writing output to {}", config.output_file.display());
    write_mapping(&config.output_file, &regrouped.mapping)?;

    Ok(RunSummary {
        input_file: config.input_file.clone(),
        output_file: config.output_file.clone(),
        records: regrouped.records,
        entries: regrouped.mapping.len(),
        overwritten: regrouped.overwritten,
    })
}
