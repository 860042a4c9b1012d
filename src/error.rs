use std::path::PathBuf;

use thiserror::Error;

/// Raised when a factory is handed a key outside its recognized set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("invalid burger type '{key}', expected one of: basic, standard, premium")]
    InvalidDiscriminator { key: String },
}

impl FactoryError {
    pub fn invalid(key: impl Into<String>) -> Self {
        Self::InvalidDiscriminator { key: key.into() }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("fail to save your document to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_discriminator_names_the_key() {
        let err = FactoryError::invalid("meal");
        assert_eq!(err, FactoryError::InvalidDiscriminator { key: "meal".to_string() });
        assert!(err.to_string().contains("'meal'"));
    }

    #[test]
    fn storage_error_keeps_source() {
        use std::error::Error as _;

        let err = StorageError::Io {
            path: PathBuf::from("/nope/document.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/document.txt"));
        assert!(err.source().is_some());
    }
}
