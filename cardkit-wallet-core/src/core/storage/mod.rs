//! In-memory wallet storage
//!
//! This module contains the reference backend for the wallet repository
//! contract. Persistent backends live with the embedding application and
//! satisfy the same contract.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::WalletCard;
use crate::domain::repositories::WalletRepository;
use crate::shared::error::WalletError;
use crate::shared::types::CardId;

#[derive(Default)]
struct Store {
    seq: u64,
    cards: HashMap<CardId, (u64, WalletCard)>,
}

/// In-memory card store.
///
/// Records carry a monotonic insertion sequence so enumeration order is
/// stable across calls. Overwriting an existing id keeps its original
/// sequence slot: an updated card does not move for tie-break purposes.
pub struct InMemoryWalletRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for InMemoryWalletRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn save(&self, card: WalletCard) -> Result<(), WalletError> {
        let mut store = self.store.write().await;
        let seq = match store.cards.get(&card.id) {
            Some((seq, _)) => *seq,
            None => {
                store.seq += 1;
                store.seq
            }
        };
        store.cards.insert(card.id, (seq, card));
        Ok(())
    }

    async fn get(&self, id: CardId) -> Result<Option<WalletCard>, WalletError> {
        let store = self.store.read().await;
        Ok(store.cards.get(&id).map(|(_, card)| card.clone()))
    }

    async fn get_all(&self) -> Result<Vec<WalletCard>, WalletError> {
        let store = self.store.read().await;
        let mut entries: Vec<(u64, WalletCard)> = store.cards.values().cloned().collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, card)| card).collect())
    }

    async fn remove(&self, id: CardId) -> Result<(), WalletError> {
        let mut store = self.store.write().await;
        store.cards.remove(&id);
        Ok(())
    }
}
