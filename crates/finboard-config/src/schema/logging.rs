//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for the workspace's crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "finboard=trace",
            LogLevel::Debug => "finboard=debug",
            LogLevel::Info => "finboard=info",
            LogLevel::Warn => "finboard=warn",
            LogLevel::Error => "finboard=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
