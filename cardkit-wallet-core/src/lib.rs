//! CardKit Wallet Core
//!
//! Wallet card directory for CardKit. Stores tokenized payment card
//! references on behalf of a user and keeps the default-card assignment
//! consistent across add/update/remove operations, with a deterministic
//! retrieval order for display.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core functionality:
//!
//! - **Core**: wallet service and the in-memory storage backend
//! - **Domain**: entities and repository contracts
//! - **Shared**: common types, constants, and errors
//!
//! The card token is an opaque reference issued by the payment processor;
//! tokenization, card validation, and persistence formats belong to the
//! embedding application and its collaborators.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cardkit_wallet_core::{
//!     CardNetwork, InMemoryWalletRepository, WalletCard, WalletService,
//! };
//!
//! # async fn demo() -> Result<(), cardkit_wallet_core::WalletError> {
//! let service = WalletService::new(Arc::new(InMemoryWalletRepository::new()));
//!
//! let card = WalletCard::new(
//!     "4242".to_string(),
//!     "12/30".to_string(),
//!     "tok_v1_9f2c7a".to_string(),
//!     CardNetwork::Visa,
//!     "Groceries".to_string(),
//!     false,
//! );
//! service.add(card).await?;
//!
//! // The first card in an empty wallet becomes the default.
//! let default = service.get_default().await?;
//! assert!(default.is_some());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::sync::Arc;

use dotenv::dotenv;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod shared;

// Re-export specific components
pub use crate::core::storage::InMemoryWalletRepository;
pub use crate::core::wallet::{OrderedWallet, WalletService};

// Re-export domain entities
pub use crate::domain::entities::WalletCard;
pub use crate::domain::repositories::WalletRepository;

// Re-export shared types
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{CardId, CardNetwork, CardToken, WalletResult};

/// Initialize logging.
pub fn init() {
    env_logger::init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the wallet directory with configuration from .env or safe defaults.
///
/// Reads `WALLET_CORE_MAX_CARDS` to override the advised wallet capacity and
/// returns a [`WalletService`] backed by the in-memory reference repository.
/// Embedding applications that bring their own storage construct
/// [`WalletService`] directly instead.
pub fn init_wallet_core() -> Result<WalletService, WalletError> {
    dotenv().ok(); // Load .env if present

    let max_cards = match env::var(shared::constants::ENV_MAX_WALLET_CARDS) {
        Ok(raw) => raw.parse::<usize>().map_err(|_| {
            WalletError::config(format!(
                "{} must be a positive integer, got {:?}",
                shared::constants::ENV_MAX_WALLET_CARDS,
                raw
            ))
        })?,
        Err(_) => shared::constants::DEFAULT_MAX_WALLET_CARDS,
    };

    let repo = Arc::new(InMemoryWalletRepository::new());
    Ok(WalletService::with_max_cards(repo, max_cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::CardNetwork;

    #[tokio::test]
    async fn test_wallet_core_initialization() {
        let service = init_wallet_core().expect("Failed to initialize wallet core");

        let card = WalletCard::new(
            "4242".to_string(),
            "12/30".to_string(),
            "tok_v1_9f2c7a".to_string(),
            CardNetwork::Visa,
            "Groceries".to_string(),
            false,
        );
        service.add(card).await.expect("Failed to add card");

        let default = service
            .get_default()
            .await
            .expect("Failed to get default")
            .expect("First card must become the default");
        assert_eq!(default.assigned_name, "Groceries");
    }
}
