//! Wallet card directory service
//!
//! This module contains the orchestrator for the wallet card directory.
//! All mutation and query operations pass through [`WalletService`]; it keeps
//! the repository at zero (empty wallet) or exactly one default card at every
//! observable point.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::WalletCard;
use crate::domain::repositories::WalletRepository;
use crate::shared::constants::DEFAULT_MAX_WALLET_CARDS;
use crate::shared::error::WalletError;
use crate::shared::types::CardId;

/// Cards in canonical display order: the default card first, then the most
/// recently touched.
pub type OrderedWallet = Vec<WalletCard>;

/// Invariant-enforcing orchestrator over a [`WalletRepository`].
///
/// The repository is pure storage; the default-card rules live here. Cards
/// are handed in fully formed by the caller and returned as copies.
pub struct WalletService {
    repo: Arc<dyn WalletRepository>,
    max_cards: usize,
    // Default uniqueness is enforced via a read-then-write sequence, so the
    // four mutating operations must never interleave.
    write_gate: Mutex<()>,
}

impl WalletService {
    pub fn new(repo: Arc<dyn WalletRepository>) -> Self {
        Self::with_max_cards(repo, DEFAULT_MAX_WALLET_CARDS)
    }

    pub fn with_max_cards(repo: Arc<dyn WalletRepository>, max_cards: usize) -> Self {
        Self {
            repo,
            max_cards,
            write_gate: Mutex::new(()),
        }
    }

    /// Add a card to the wallet.
    ///
    /// The first card in an empty wallet always becomes the default; a card
    /// arriving with the default flag set demotes the current default. Never
    /// fails on its own; repository failures propagate unchanged.
    pub async fn add(&self, card: WalletCard) -> Result<(), WalletError> {
        let _gate = self.write_gate.lock().await;
        self.add_locked(card).await
    }

    /// Replace the stored card carrying the same id.
    ///
    /// Fails with [`WalletError::UnknownCard`] when no record matches; the
    /// lookup happens before any mutation, so a failed update leaves the
    /// wallet untouched. The replacement goes through the same default
    /// promotion/demotion rules as [`WalletService::add`].
    pub async fn update(&self, card: WalletCard) -> Result<(), WalletError> {
        let _gate = self.write_gate.lock().await;

        if self.repo.get(card.id).await?.is_none() {
            return Err(WalletError::unknown_card(card.id));
        }

        // The keyed save overwrites in place, so the record never goes
        // missing between repository calls.
        self.add_locked(card).await
    }

    /// Remove a card. Removing an id that is not present is a no-op.
    ///
    /// When the removed record was the default, the highest-priority
    /// remaining card is promoted so a non-empty wallet never ends up
    /// without a default.
    pub async fn remove(&self, card: &WalletCard) -> Result<(), WalletError> {
        let _gate = self.write_gate.lock().await;

        // The stored record decides re-promotion, not the caller's copy,
        // which may be stale.
        let stored = self.repo.get(card.id).await?;
        self.repo.remove(card.id).await?;

        if stored.is_some_and(|c| c.default_payment_method) {
            let remaining = canonical_order(self.repo.get_all().await?);
            if let Some(next_default) = remaining.into_iter().next() {
                log::info!("shifting default to {}", next_default.display_label());
                self.repo.save(next_default.with_default()).await?;
            }
        }

        Ok(())
    }

    /// Look up a card by id. Read-only.
    pub async fn get(&self, id: CardId) -> Result<Option<WalletCard>, WalletError> {
        self.repo.get(id).await
    }

    /// All cards in canonical display order. Read-only.
    pub async fn get_all(&self) -> Result<OrderedWallet, WalletError> {
        Ok(canonical_order(self.repo.get_all().await?))
    }

    /// The unique default card, or `None` for an empty wallet.
    ///
    /// Derived on demand from the stored flags rather than a cached default
    /// pointer, so it cannot drift out of sync with the records.
    pub async fn get_default(&self) -> Result<Option<WalletCard>, WalletError> {
        let cards = self.repo.get_all().await?;
        Ok(cards.into_iter().find(|c| c.default_payment_method))
    }

    async fn add_locked(&self, card: WalletCard) -> Result<(), WalletError> {
        let existing = self.repo.get_all().await?;
        let mut card_to_add = card;

        if card_to_add.default_payment_method {
            self.resign_current_default().await?;
        } else if existing.is_empty() {
            // Only card in the wallet, so it must be the default.
            card_to_add = card_to_add.with_default();
        }

        let grows = !existing.iter().any(|c| c.id == card_to_add.id);
        if grows && existing.len() + 1 > self.max_cards {
            log::warn!(
                "wallet grows to {} cards, above the advised limit of {}",
                existing.len() + 1,
                self.max_cards
            );
        }

        log::info!("saving wallet card {}", card_to_add.display_label());
        self.repo.save(card_to_add).await
    }

    async fn resign_current_default(&self) -> Result<(), WalletError> {
        if let Some(current) = self.get_default().await? {
            self.repo.save(current.without_default()).await?;
        }
        Ok(())
    }
}

/// Canonical display order: the default card first, then most recently
/// updated (cards never updated sort by creation time), then most recently
/// created. The sort is stable, so fully tied cards keep the backend's
/// enumeration order.
fn canonical_order(mut cards: Vec<WalletCard>) -> OrderedWallet {
    cards.sort_by(|lhs, rhs| {
        rhs.default_payment_method
            .cmp(&lhs.default_payment_method)
            .then_with(|| {
                let lhs_touched = lhs.date_updated.unwrap_or(lhs.date_created);
                let rhs_touched = rhs.date_updated.unwrap_or(rhs.date_created);
                rhs_touched.cmp(&lhs_touched)
            })
            .then_with(|| rhs.date_created.cmp(&lhs.date_created))
    });
    cards
}
