use std::fs;
use std::path::{Path, PathBuf};
use log::LevelFilter;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::errors::{InspectorError, InspectorResult};
use crate::structs::config::inspector_config::InspectorConfig;

pub struct ConfigManager;

impl ConfigManager {

    /// `--config` wins, then the environment variable, then the user config dir.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        Self::default_path()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config the inspector should use. A missing file at the default
    /// location means defaults; a missing file the user asked for is an error.
    pub fn load(explicit: Option<&Path>) -> InspectorResult<(InspectorConfig, Option<PathBuf>)> {
        let Some(path) = Self::resolve_path(explicit) else {
            return Ok((InspectorConfig::default(), None));
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(InspectorError::ConfigurationFileError {
                    path,
                    reason: "file does not exist".to_string(),
                });
            }
            return Ok((InspectorConfig::default(), None));
        }

        let config = Self::load_from(&path)?;
        Ok((config, Some(path)))
    }

    pub fn load_from(path: &Path) -> InspectorResult<InspectorConfig> {
        let content = fs::read_to_string(path).map_err(|e| InspectorError::ConfigurationFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: InspectorConfig = toml::from_str(&content).map_err(|e| InspectorError::ConfigurationFileError {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn validate_config(config: &InspectorConfig) -> InspectorResult<()> {
        Self::log_level(config)?;

        if config.output.max_text_preview == 0 {
            return Err(InspectorError::ConfigurationError(
                "output.max_text_preview must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn log_level(config: &InspectorConfig) -> InspectorResult<LevelFilter> {
        config.log_level.parse::<LevelFilter>().map_err(|_| {
            InspectorError::ConfigurationError(format!(
                "unknown log_level '{}' (expected off, error, warn, info, debug or trace)",
                config.log_level
            ))
        })
    }

    pub fn create_sample_config(path: &Path, force: bool) -> InspectorResult<()> {
        if path.exists() && !force {
            return Err(InspectorError::ConfigurationFileError {
                path: path.to_path_buf(),
                reason: "file already exists (use --force to overwrite)".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::sample_config())?;
        Ok(())
    }

    pub fn sample_config() -> &'static str {
        r#"# completion-inspect configuration

# Log level used when RUST_LOG is not set: off, error, warn, info, debug, trace
log_level = "info"

[output]
# "summary" prints a report, "json" re-emits the decoded response
format = "summary"

# Print log probability data for each choice
show_logprobs = false

# Characters of choice text shown in summaries
max_text_preview = 200

[checks]
# Log a warning when total_tokens != prompt_tokens + completion_tokens
warn_on_usage_mismatch = true

# Treat that mismatch as a failure in `decode` and `check`
fail_on_usage_mismatch = false
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::output_format::OutputFormat;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: InspectorConfig = toml::from_str(ConfigManager::sample_config()).unwrap();
        assert_eq!(config, InspectorConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: InspectorConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
        assert!(config.checks.warn_on_usage_mismatch);
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/some/config.toml");
        assert_eq!(ConfigManager::resolve_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            ConfigManager::load(Some(&path)),
            Err(InspectorError::ConfigurationFileError { .. })
        ));
    }

    #[test]
    fn round_trips_through_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigManager::create_sample_config(&path, false).unwrap();

        let (config, loaded_from) = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config, InspectorConfig::default());
        assert_eq!(loaded_from, Some(path.clone()));

        assert!(ConfigManager::create_sample_config(&path, false).is_err());
        assert!(ConfigManager::create_sample_config(&path, true).is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = InspectorConfig::default();
        config.log_level = "loud".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());

        let mut config = InspectorConfig::default();
        config.output.max_text_preview = 0;
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
