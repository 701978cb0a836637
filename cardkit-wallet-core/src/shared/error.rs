//! Error handling for the wallet card directory
//!
//! This module defines the error types used throughout the wallet core.

use crate::shared::types::CardId;
use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Unknown wallet card: {0}")]
    UnknownCard(CardId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create an unknown-card error
    pub fn unknown_card(id: CardId) -> Self {
        Self::UnknownCard(id)
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let unknown = WalletError::unknown_card(uuid::Uuid::new_v4());
        let storage_error = WalletError::storage("Backing store offline");

        assert!(matches!(unknown, WalletError::UnknownCard(_)));
        assert!(matches!(storage_error, WalletError::Storage(_)));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wallet_error: WalletError = io_error.into();

        assert!(matches!(wallet_error, WalletError::Storage(_)));
    }

    #[test]
    fn test_error_display() {
        let id = uuid::Uuid::new_v4();
        let error = WalletError::unknown_card(id);
        let display = format!("{}", error);

        assert!(display.contains("Unknown wallet card"));
        assert!(display.contains(&id.to_string()));
    }
}
