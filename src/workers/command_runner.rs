use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::STDIN_SOURCE_NAME;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::enums::usage_check::UsageCheck;
use crate::errors::{InspectorError, InspectorResult};
use crate::logger::response_logger::ResponseLogger;
use crate::services::response_decoder::ResponseDecoder;
use crate::structs::check_report::CheckReport;
use crate::structs::completion::completion_response::CompletionResponse;
use crate::structs::config::inspector_config::InspectorConfig;

pub struct CommandRunner {
    config: InspectorConfig,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: InspectorConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            start_time: None,
        }
    }

    pub fn run_command(&mut self, command: Commands) -> InspectorResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { force } => self.init_command(force),
            Commands::Decode { path, format } => self.decode_command(path.as_deref(), format),
            Commands::Check { paths } => self.check_command(&paths),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.3}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, force: bool) -> InspectorResult<()> {
        let path = self
            .config_path
            .clone()
            .or_else(ConfigManager::default_path)
            .ok_or_else(|| InspectorError::ConfigurationError("no config directory available; pass --config".to_string()))?;

        log::info!("🚀 Writing sample configuration to {}", path.display());
        ConfigManager::create_sample_config(&path, force)?;
        log::info!("✅ Configuration file created successfully!");
        Ok(())
    }

    fn decode_command(&self, path: Option<&Path>, format: Option<OutputFormat>) -> InspectorResult<()> {
        let (source_name, bytes) = Self::read_payload(path)?;
        let (response, warnings) = self.inspect_payload(&source_name, &bytes)?;

        match format.unwrap_or(self.config.output.format) {
            OutputFormat::Summary => ResponseLogger::print_summary(&source_name, &response, &self.config.output),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        }

        for warning in &warnings {
            log::warn!("⚠️ {}", warning);
        }

        Ok(())
    }

    fn check_command(&self, paths: &[PathBuf]) -> InspectorResult<()> {
        log::info!("🔍 Checking {} payloads...", paths.len());
        let mut report = CheckReport::default();

        for path in paths {
            let outcome = Self::read_payload(Some(path.as_path()))
                .and_then(|(source_name, bytes)| self.inspect_payload(&source_name, &bytes));

            match outcome {
                Ok((_, warnings)) => {
                    report.passed.push(path.display().to_string());
                    report.warnings.extend(warnings);
                }
                Err(e) => {
                    log::debug!("{:?}", e);
                    report.failures.push(e.to_string());
                }
            }
        }

        report.print_summary();

        if report.is_valid() {
            Ok(())
        } else {
            Err(InspectorError::CheckFailed {
                failed: report.failures.len(),
                total: report.total(),
            })
        }
    }

    /// Decodes one payload and applies the configured usage checks.
    /// Returns the response together with any data-quality warnings.
    pub fn inspect_payload(&self, source_name: &str, bytes: &[u8]) -> InspectorResult<(CompletionResponse, Vec<String>)> {
        let response = ResponseDecoder::decode(bytes)
            .map_err(|e| InspectorError::decode_failed(source_name, e))?;

        log::debug!(
            "decoded {} choices from {} (model {})",
            response.choices.len(),
            source_name,
            response.model
        );

        let mut warnings = Vec::new();

        if let UsageCheck::Mismatch { expected, reported } = response.usage_check() {
            if self.config.checks.fail_on_usage_mismatch {
                return Err(InspectorError::UsageMismatch {
                    source_name: source_name.to_string(),
                    expected,
                    reported,
                });
            }
            if self.config.checks.warn_on_usage_mismatch {
                warnings.push(format!(
                    "{}: total_tokens is {} but prompt + completion is {}",
                    source_name, reported, expected
                ));
            }
        }

        Ok((response, warnings))
    }

    fn read_payload(path: Option<&Path>) -> InspectorResult<(String, Vec<u8>)> {
        match path {
            Some(path) => {
                let source_name = path.display().to_string();
                let bytes = fs::read(path).map_err(|e| InspectorError::PayloadReadError {
                    source_name: source_name.clone(),
                    reason: e.to_string(),
                })?;
                Ok((source_name, bytes))
            }
            None => {
                let mut bytes = Vec::new();
                io::stdin().read_to_end(&mut bytes).map_err(|e| InspectorError::PayloadReadError {
                    source_name: STDIN_SOURCE_NAME.to_string(),
                    reason: e.to_string(),
                })?;
                Ok((STDIN_SOURCE_NAME.to_string(), bytes))
            }
        }
    }
}
