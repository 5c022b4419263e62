use thiserror::Error;

/// Errors that can occur while computing inter-references.
#[derive(Error, Debug)]
pub enum InterRefsError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("corpus has not been finalized; run stages only after content is stable")]
    NotFinalized,

    #[error("stage error: {message} (stage: {stage})")]
    Stage { message: String, stage: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `InterRefsError`.
pub type Result<T> = std::result::Result<T, InterRefsError>;
