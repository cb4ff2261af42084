use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "provgen.toml";

/// Values read from `provgen.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub out: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_attempts: Option<u32>,
    pub log_file: Option<PathBuf>,
}

/// Load settings from an explicit path, or from `provgen.toml` when present.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

fn parse_settings(content: &str) -> Result<Settings, CliError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_settings() {
        let settings = parse_settings(
            r#"
out = "fixtures/provenance.json"
seed = 42
"#,
        )
        .expect("parse settings");

        assert_eq!(settings.out, Some(PathBuf::from("fixtures/provenance.json")));
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_attempts, None);
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_settings("").expect("parse"), Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("degree = 3").is_err());
    }
}
