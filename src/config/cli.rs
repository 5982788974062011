use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::ResponderConfig;

/// Command-line arguments for the default backend.
#[derive(Debug, Parser, Default)]
#[command(name = "default-backend", version, about = "Default backend serving custom error pages")]
pub struct CliArgs {
    /// Optional path to a TOML configuration file.
    #[arg(long, env = "DEFAULT_BACKEND_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Port number to serve.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the error pages.
    #[arg(long, env = "DEFAULT_BACKEND_ROOT", value_name = "DIR")]
    pub root: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "DEFAULT_BACKEND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Read the error pages on every request instead of caching them.
    #[arg(long)]
    pub no_cache: bool,
}

impl CliArgs {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut ResponderConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(root) = &self.root {
            config.pages.root = root.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.no_cache {
            config.cache.enabled = false;
        }
    }
}
