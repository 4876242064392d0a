use std::env;
use std::fmt;

use crate::grading::scoring::GradingConfig;

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for embedders of the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub grading: GradingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut grading = GradingConfig::default();
        if let Some(ceiling) = read_ceiling("GRADING_CA_MAX")? {
            grading.ca_component_max = ceiling;
        }
        if let Some(ceiling) = read_ceiling("GRADING_EXAM_MAX")? {
            grading.exam_max = ceiling;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            grading,
        })
    }
}

fn read_ceiling(name: &'static str) -> Result<Option<f64>, ConfigError> {
    let raw = match env::var(name) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };

    let ceiling = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidCeiling { name })?;

    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(ConfigError::CeilingOutOfRange { name });
    }

    Ok(Some(ceiling))
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCeiling { name: &'static str },
    CeilingOutOfRange { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCeiling { name } => {
                write!(f, "{name} must be a numeric score ceiling")
            }
            ConfigError::CeilingOutOfRange { name } => {
                write!(f, "{name} must be a finite value greater than zero")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
