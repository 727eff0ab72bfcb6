use thiserror::Error;

/// Errors that can occur across the recording pipeline.
///
/// Asynchronous stages catch these at their origin and convert them into a
/// delegate notification plus a forced finalize; none escape to a context
/// the pipeline does not control.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("sample source error: {0}")]
    Source(String),

    #[error("codec error: {0}")]
    Codec(String),

    #[error("container error: {0}")]
    Container(String),
}
