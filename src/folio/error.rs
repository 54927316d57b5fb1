use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Unknown {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Render error: {0}")]
    Render(String),
}

impl FolioError {
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        FolioError::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
