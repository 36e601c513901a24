use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Bad index, range, or non-positive dimension
    #[error("{0}")]
    Validation(String),
    /// Unknown registry key
    #[error("unknown {kind} '{name}'. Valid {kind}s: {valid}.")]
    UnknownName {
        kind: &'static str,
        name: String,
        valid: String,
    },
    /// No candidate layout fits the device
    #[error("{0}")]
    NoFit(String),
}

impl LayoutError {
    pub fn validation(msg: impl Into<String>) -> Self {
        LayoutError::Validation(msg.into())
    }

    /// Build an unknown-name error listing the valid keys in the given order
    pub fn unknown<'a>(
        kind: &'static str,
        name: &str,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        LayoutError::UnknownName {
            kind,
            name: name.to_string(),
            valid: valid.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Check that an index lies in `0..count`, naming the field in the error.
pub(crate) fn check_index(field: &str, index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else if count == 0 {
        Err(LayoutError::validation(format!("{field} has no valid values.")))
    } else {
        Err(LayoutError::validation(format!(
            "{field} must be between 0 and {}.",
            count - 1
        )))
    }
}
