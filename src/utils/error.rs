use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Registry returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unrecognized registry payload shape: {context}")]
    UnrecognizedShape { context: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Export error: {message}")]
    ExportError { message: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
