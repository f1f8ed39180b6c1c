use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImgvisError>;

#[derive(Debug, Error)]
pub enum ImgvisError {
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for '{option}': {message}")]
    InvalidValue { option: String, message: String },
    #[error("failed to initialize {plugin}: {message}")]
    Initialization { plugin: String, message: String },
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),
}

impl ImgvisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImgvisError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(option: &str, message: impl Into<String>) -> Self {
        ImgvisError::InvalidValue {
            option: option.to_string(),
            message: message.into(),
        }
    }

    pub fn initialization(plugin: &str, message: impl Into<String>) -> Self {
        ImgvisError::Initialization {
            plugin: plugin.to_string(),
            message: message.into(),
        }
    }
}
