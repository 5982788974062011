//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::cli::CliArgs;
use crate::config::schema::ResponderConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ResponderConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ResponderConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration: defaults, then the optional file,
/// then command-line and environment overrides.
pub fn resolve_config(args: &CliArgs) -> Result<ResponderConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ResponderConfig::default(),
    };

    args.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config(
            r#"
            [pages]
            root = "/srv/errors"

            [cache]
            enabled = false
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.pages.root, "/srv/errors");
        assert!(!config.cache.enabled);
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[listener\nport = ");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_errors_are_reported() {
        let file = write_config("[pages]\nroot = \"\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("pages.root must not be empty"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("[listener]\nport = 9000\n");
        let args = CliArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(7070),
            root: Some("/tmp/pages".into()),
            log_level: None,
            no_cache: true,
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.listener.port, 7070);
        assert_eq!(config.pages.root, "/tmp/pages");
        assert!(!config.cache.enabled);
    }
}
