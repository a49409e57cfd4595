use thiserror::Error;

/// A form submission was rejected before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The named required field was empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Reject `value` as `field` when it is empty.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}
