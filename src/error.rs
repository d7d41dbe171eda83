use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl PosterError {
    /// Message shown to the caller. Validation and configuration problems are
    /// reported verbatim; everything coming from the provider is collapsed
    /// into one generic message.
    pub fn public_message(&self) -> String {
        match self {
            PosterError::ValidationError(msg) | PosterError::ConfigError(msg) => msg.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

pub const GENERIC_FAILURE: &str = "Failed to generate poster. Please try again.";

pub type Result<T> = std::result::Result<T, PosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_pass_through() {
        let err = PosterError::ValidationError("Product image and category are required".into());
        assert_eq!(err.public_message(), "Product image and category are required");
    }

    #[test]
    fn provider_failures_are_generic() {
        let err = PosterError::ProviderError("HTTP 503 Service Unavailable".into());
        assert_eq!(err.public_message(), GENERIC_FAILURE);
        assert_eq!(
            err.to_string(),
            "Provider error: HTTP 503 Service Unavailable"
        );
    }
}
