//! Unified error types for the image viewer application.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// The navigation index does not point into the image list, e.g. the
    /// opened file is missing from its own directory listing.
    InvalidIndex {
        index: Option<usize>,
        len: usize,
        path: Option<PathBuf>,
    },
    /// The file exists but could not be decoded as a supported image.
    Decode { path: PathBuf, reason: String },
    /// Error scanning directory for image files
    DirectoryScan { path: PathBuf, reason: String },
    /// Error reading or writing the settings file
    Settings(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidIndex { index, len, path } => {
                let index = index.map_or_else(|| "none".to_string(), |i| i.to_string());
                write!(f, "Index is wrong: {} of {} images", index, len)?;
                if let Some(path) = path {
                    write!(f, " ({})", path.display())?;
                }
                Ok(())
            }
            AppError::Decode { path, reason } => {
                write!(f, "Failed to open image {}: {}", path.display(), reason)
            }
            AppError::DirectoryScan { path, reason } => {
                write!(f, "Failed to list directory {}: {}", path.display(), reason)
            }
            AppError::Settings(msg) => write!(f, "Settings error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Settings(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_path() {
        let err = AppError::Decode {
            path: PathBuf::from("/photos/broken.png"),
            reason: "unexpected EOF".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/photos/broken.png"));
        assert!(message.contains("unexpected EOF"));
    }

    #[test]
    fn invalid_index_without_index_says_none() {
        let err = AppError::InvalidIndex {
            index: None,
            len: 3,
            path: Some(PathBuf::from("/photos/missing.jpg")),
        };
        assert_eq!(
            err.to_string(),
            "Index is wrong: none of 3 images (/photos/missing.jpg)"
        );
    }
}
