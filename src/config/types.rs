// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub resources: ResourcesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log each accepted connection in addition to the per-request line
    pub access_log: bool,
    /// Request lines are appended here, one per request
    pub request_log_file: String,
}

/// Locations of templates, partials and public assets
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    pub template_dir: String,
    pub partials_dir: String,
    pub public_dir: String,
}
