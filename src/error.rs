use std::fmt;

use crate::config::ConfigError;
use crate::grading::service::ResultServiceError;
use crate::telemetry::TelemetryError;

/// Unified error surface for embedders wiring the engine into a host process.
#[derive(Debug)]
pub enum EngineError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Service(ResultServiceError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(err) => write!(f, "configuration error: {}", err),
            EngineError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            EngineError::Service(err) => write!(f, "result processing error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(err) => Some(err),
            EngineError::Telemetry(err) => Some(err),
            EngineError::Service(err) => Some(err),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for EngineError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<ResultServiceError> for EngineError {
    fn from(value: ResultServiceError) -> Self {
        Self::Service(value)
    }
}
