use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    /// Malformed input: wrong feature count, unsupported feature type, or a
    /// logits row that does not line up with the label table.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The model has not finished loading.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
}

impl ClassifierError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
