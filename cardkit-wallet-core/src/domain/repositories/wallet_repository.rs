//! Wallet repository contract
//!
//! This module defines the storage contract behind the wallet service.

use async_trait::async_trait;

use crate::domain::entities::WalletCard;
use crate::shared::error::WalletError;
use crate::shared::types::CardId;

/// Storage contract for wallet cards.
///
/// Implementations own physical storage and carry no business rules; the
/// default-card invariant is enforced above this trait by the wallet service.
/// `save` is an insert-or-overwrite keyed by `card.id`, which also serves as
/// the atomic replace used by updates. The enumeration order of `get_all` is
/// unspecified by this contract; ordering is the service's responsibility.
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Insert or overwrite the record keyed by `card.id`.
    async fn save(&self, card: WalletCard) -> Result<(), WalletError>;

    /// Return the record with the given id, if present.
    async fn get(&self, id: CardId) -> Result<Option<WalletCard>, WalletError>;

    /// Return all records.
    async fn get_all(&self) -> Result<Vec<WalletCard>, WalletError>;

    /// Delete the record if present. Removing an absent id is a no-op.
    async fn remove(&self, id: CardId) -> Result<(), WalletError>;
}
