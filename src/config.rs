use crate::regroup::{DuplicatePolicy, RegroupOptions, DEFAULT_KEY_FIELD};
use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "languages-by-country-2025.json";
pub const DEFAULT_OUTPUT_FILE: &str = "correct-languages-by-country-2025.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Files
    pub input_file: PathBuf,
    pub output_file: PathBuf,

    // Regrouping
    pub key_field: String,
    pub duplicate_keys: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            duplicate_keys: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let key_field = std::env::var("LANGUAGES_KEY_FIELD")
            .unwrap_or_else(|_| DEFAULT_KEY_FIELD.to_string());
        if key_field.is_empty() {
            bail!("LANGUAGES_KEY_FIELD must not be empty");
        }

        let duplicate_keys = match std::env::var("LANGUAGES_DUPLICATE_KEYS") {
            Ok(value) => value
                .parse::<DuplicatePolicy>()
                .map_err(|e| anyhow!(e))
                .context("Invalid LANGUAGES_DUPLICATE_KEYS")?,
            Err(_) => DuplicatePolicy::default(),
        };

        Ok(Self {
            // Files
            input_file: std::env::var("LANGUAGES_INPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_FILE)),
            output_file: std::env::var("LANGUAGES_OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE)),

            // Regrouping
            key_field,
            duplicate_keys,
        })
    }

    pub fn regroup_options(&self) -> RegroupOptions {
        RegroupOptions {
            key_field: self.key_field.clone(),
            duplicates: self.duplicate_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "LANGUAGES_INPUT_FILE",
        "LANGUAGES_OUTPUT_FILE",
        "LANGUAGES_KEY_FIELD",
        "LANGUAGES_DUPLICATE_KEYS",
    ];

    const UNPREFIXED: [&str; 4] = ["INPUT_FILE", "OUTPUT_FILE", "KEY_FIELD", "DUPLICATE_KEYS"];

    fn clear_env() {
        for var in VARS.iter().chain(UNPREFIXED.iter()) {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load defaults");

        assert_eq!(config.input_file, PathBuf::from("languages-by-country-2025.json"));
        assert_eq!(
            config.output_file,
            PathBuf::from("correct-languages-by-country-2025.json")
        );
        assert_eq!(config.key_field, "flagCode");
        assert_eq!(config.duplicate_keys, DuplicatePolicy::Overwrite);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LANGUAGES_INPUT_FILE", "data/in.json");
        std::env::set_var("LANGUAGES_OUTPUT_FILE", "data/out.json");
        std::env::set_var("LANGUAGES_KEY_FIELD", "iso2");
        std::env::set_var("LANGUAGES_DUPLICATE_KEYS", "reject");

        let config = Config::from_env().expect("Should load overrides");
        clear_env();

        assert_eq!(config.input_file, PathBuf::from("data/in.json"));
        assert_eq!(config.output_file, PathBuf::from("data/out.json"));
        assert_eq!(config.key_field, "iso2");
        assert_eq!(config.duplicate_keys, DuplicatePolicy::Reject);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unprefixed_names() {
        clear_env();
        std::env::set_var("INPUT_FILE", "/tmp/other-input.json");
        std::env::set_var("OUTPUT_FILE", "/tmp/elsewhere.json");
        std::env::set_var("KEY_FIELD", "id");
        std::env::set_var("DUPLICATE_KEYS", "merge");

        let config = Config::from_env().expect("Should ignore unprefixed names");
        clear_env();

        assert_eq!(config.input_file, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.key_field, "flagCode");
        assert_eq!(config.duplicate_keys, DuplicatePolicy::Overwrite);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_duplicate_policy() {
        clear_env();
        std::env::set_var("LANGUAGES_DUPLICATE_KEYS", "merge");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("LANGUAGES_DUPLICATE_KEYS"));
        assert!(format!("{:#}", err).contains("merge"));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_field() {
        clear_env();
        std::env::set_var("LANGUAGES_KEY_FIELD", "");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_regroup_options_follow_config() {
        let config = Config {
            key_field: "iso3".to_string(),
            duplicate_keys: DuplicatePolicy::Reject,
            ..Config::default()
        };

        let options = config.regroup_options();
        assert_eq!(options.key_field, "iso3");
        assert_eq!(options.duplicates, DuplicatePolicy::Reject);
    }
}
