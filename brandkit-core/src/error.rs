use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrandError>;

/// One failed step of a provider chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub provider: String,
    pub reason: String,
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.provider, self.reason)
    }
}

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("{what} not found at {}", path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("invalid {name}: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("no {what} available (tried: {})", format_attempts(attempts))]
    Exhausted { what: &'static str, attempts: Vec<Attempt> },

    #[error("font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrandError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BrandError::InvalidParam { name, reason: reason.into() }
    }

    pub fn missing(what: &'static str, path: impl Into<PathBuf>) -> Self {
        BrandError::MissingInput { what, path: path.into() }
    }
}

fn format_attempts(attempts: &[Attempt]) -> String {
    if attempts.is_empty() {
        return "nothing".to_string();
    }
    attempts.iter().map(|a| a.to_string()).collect::<Vec<_>>().join("; ")
}
