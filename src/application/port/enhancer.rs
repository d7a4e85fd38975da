// SPDX-License-Identifier: MPL-2.0
//! Enhancement port definition.
//!
//! An [`Enhancer`] takes an [`EnhanceRequest`] and resolves to the encoded
//! bytes of the generated image. What happens in between is the adapter's
//! business.

use crate::domain::enhance::EnhanceRequest;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// EnhanceError
// =============================================================================

/// Errors that can occur during a remote enhancement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    /// No API key is configured.
    MissingApiKey,

    /// The service rejected the API key.
    InvalidKey,

    /// The service refused the image for safety reasons.
    SafetyFilter,

    /// The run completed but no image came back.
    NoImageReturned,

    /// Transport-level failure.
    Network(String),

    /// Anything else, with the raw message.
    Other(String),
}

impl EnhanceError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EnhanceError::MissingApiKey => "error-enhance-missing-key",
            EnhanceError::InvalidKey => "error-enhance-invalid-key",
            EnhanceError::SafetyFilter => "error-enhance-safety",
            EnhanceError::NoImageReturned => "error-enhance-no-image",
            EnhanceError::Network(_) => "error-enhance-network",
            EnhanceError::Other(_) => "error-enhance-general",
        }
    }

    /// Categorizes a raw error message reported by the remote service.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("requested entity was not found")
            || msg_lower.contains("api key not valid")
            || msg_lower.contains("permission denied")
        {
            return EnhanceError::InvalidKey;
        }

        if msg_lower.contains("safety") {
            return EnhanceError::SafetyFilter;
        }

        if msg_lower.contains("no image") {
            return EnhanceError::NoImageReturned;
        }

        EnhanceError::Other(msg.to_string())
    }
}

impl fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnhanceError::MissingApiKey => write!(f, "No API key configured"),
            EnhanceError::InvalidKey => write!(f, "Invalid API key"),
            EnhanceError::SafetyFilter => write!(f, "Image content flagged by safety filter"),
            EnhanceError::NoImageReturned => {
                write!(f, "Generation completed but no image was returned")
            }
            EnhanceError::Network(msg) => write!(f, "Network error: {msg}"),
            EnhanceError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EnhanceError {}

// =============================================================================
// Enhancer
// =============================================================================

/// Result of an enhancement run: the encoded output image.
pub type EnhanceResult = Result<Vec<u8>, EnhanceError>;

/// A service able to enhance an image.
pub trait Enhancer: Send + Sync {
    /// Human-readable name of the backing service, for logs.
    fn name(&self) -> &'static str;

    /// Starts an enhancement run.
    fn enhance(&self, request: EnhanceRequest) -> BoxFuture<'static, EnhanceResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_invalid_key() {
        assert_eq!(
            EnhanceError::from_message("Requested entity was not found."),
            EnhanceError::InvalidKey
        );
        assert_eq!(
            EnhanceError::from_message("API key not valid. Please pass a valid API key."),
            EnhanceError::InvalidKey
        );
    }

    #[test]
    fn from_message_safety() {
        assert_eq!(
            EnhanceError::from_message("Blocked by Safety settings"),
            EnhanceError::SafetyFilter
        );
    }

    #[test]
    fn from_message_falls_back_to_other() {
        assert!(matches!(
            EnhanceError::from_message("quota exceeded"),
            EnhanceError::Other(msg) if msg == "quota exceeded"
        ));
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(EnhanceError::SafetyFilter.i18n_key(), "error-enhance-safety");
        assert_eq!(
            EnhanceError::Network("x".into()).i18n_key(),
            "error-enhance-network"
        );
    }
}
