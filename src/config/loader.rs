//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::CheckConfig;
use crate::config::validation::ValidationError;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read and deserialize a TOML file.
///
/// Semantic validation runs later, once command-line overrides are applied.
pub fn read_config(path: &Path) -> Result<CheckConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mtr]\ncycles = 3\ntimeout_secs = 15").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.mtr.cycles, 3);
        assert_eq!(config.mtr.timeout_secs, 15);
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("/nonexistent/check_mtr.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_syntax_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mtr\ncycles = 3").unwrap();
        assert!(matches!(read_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_semantic_values_are_read_as_written() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mtr]\ncycles = 0").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.mtr.cycles, 0);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroCycles,
            ValidationError::ZeroTimeout,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: mtr.cycles must be greater than zero, \
             mtr.timeout_secs must be greater than zero"
        );
    }
}
