use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcmLookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ACM service error: {code}: {message}")]
    Service { code: String, message: String },

    #[error("Error listing certificates: {0}")]
    Listing(#[source] Box<AcmLookupError>),

    #[error("Error describing certificates: {0}")]
    Describing(#[source] Box<AcmLookupError>),

    #[error("No certificate for domain {domain:?} found in this region.")]
    NotFound { domain: String },

    #[error("Multiple certificates for domain {domain:?} found in this region ({count} matches).")]
    AmbiguousMatch { domain: String, count: usize },

    #[error("Certificate {arn} has neither a creation nor an import timestamp")]
    MissingTimestamp { arn: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AcmLookupError {
    /// Wrap a lister failure with listing context
    pub fn listing(err: AcmLookupError) -> Self {
        Self::Listing(Box::new(err))
    }

    /// Wrap a describer failure with describing context
    pub fn describing(err: AcmLookupError) -> Self {
        Self::Describing(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, AcmLookupError>;
