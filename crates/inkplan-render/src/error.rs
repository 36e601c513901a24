use inkplan_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Geometry, profile, or argument validation failure
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Theme(String),
    /// Unknown template or bad template parameter
    #[error("{0}")]
    Template(String),
    /// Malformed command-line style input
    #[error("{0}")]
    Config(String),
    /// Links or outline entries that cannot be resolved when the document is assembled
    #[error("{0}")]
    Document(String),
}

impl RenderError {
    /// Validation failure with a plain message
    pub fn invalid(msg: impl Into<String>) -> Self {
        RenderError::Layout(LayoutError::validation(msg))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
