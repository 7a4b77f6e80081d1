// Configuration module entry point
// Resolves the listen address, log locations and resource directories

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ResourcesConfig, ServerConfig};

impl Config {
    /// Load configuration from an optional `config.toml`, environment
    /// overrides and coded defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PAGESERVE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", false)?
            .set_default("logging.request_log_file", "server.log")?
            .set_default("resources.template_dir", "views")?
            .set_default("resources.partials_dir", "views/partials")?
            .set_default("resources.public_dir", "public")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // PORT is injected by hosting platforms and wins over the configured
        // value. A value that does not parse as a port is ignored.
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            cfg.server.port = port;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                workers: None,
            },
            logging: LoggingConfig {
                access_log: false,
                request_log_file: "server.log".to_string(),
            },
            resources: ResourcesConfig {
                template_dir: "views".to_string(),
                partials_dir: "views/partials".to_string(),
                public_dir: "public".to_string(),
            },
        }
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let cfg = test_config("127.0.0.1", 5050);
        assert_eq!(cfg.socket_addr().unwrap().port(), 5050);
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let cfg = test_config("not a host", 3000);
        assert!(cfg.socket_addr().is_err());
    }
}
