//! CLI argument definitions for the Dom Ojca server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Dom Ojca: the church website with its assistant chat and contact form.
#[derive(Parser, Debug, Default)]
#[command(name = "domojca", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Address to bind to (e.g. 0.0.0.0 behind a reverse proxy).
    #[arg(short = 'b', long = "bind")]
    pub bind: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > DOMOJCA_CONFIG env var > ~/.domojca/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_from(|name| std::env::var(name).ok())
    }

    pub fn resolve_config_path_from<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = lookup("DOMOJCA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path(&lookup)
    }

    /// Resolve the HTTP port.
    ///
    /// Priority: --port flag > DOMOJCA_PORT env var > config file value > 3030.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_from(config_port, |name| std::env::var(name).ok())
    }

    pub fn resolve_port_from<F>(&self, config_port: u16, lookup: F) -> u16
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = lookup("DOMOJCA_PORT").and_then(|v| v.parse::<u16>().ok()) {
            return p;
        }
        if config_port != 0 {
            return config_port;
        }
        3030
    }

    /// Resolve the bind address: --bind flag > config file value.
    pub fn resolve_bind(&self, config_bind: &str) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| config_bind.to_string())
    }

    /// Resolve the log filter.
    ///
    /// Priority: --log-level flag > RUST_LOG > config file value.
    pub fn resolve_log_filter(&self, config_level: &str) -> String {
        self.resolve_log_filter_from(config_level, |name| std::env::var(name).ok())
    }

    pub fn resolve_log_filter_from<F>(&self, config_level: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home_var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    match lookup(home_var) {
        Some(home) => PathBuf::from(home).join(".domojca").join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}
