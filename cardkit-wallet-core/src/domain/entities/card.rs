//! Wallet card entity
//!
//! This module contains the WalletCard entity representing one stored,
//! tokenized payment card in a user's wallet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::shared::types::{CardId, CardNetwork, CardToken};

/// A stored, tokenized payment card.
///
/// `id` and `date_created` are assigned once at construction and never change
/// across updates. The card token is an opaque reference to the tokenized PAN
/// held by the payment processor; this crate never interprets or validates it.
/// Callers receive copies, not the authoritative record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletCard {
    pub id: CardId,
    pub card_number_last_four: String,
    pub expiry_date: String,
    pub card_token: CardToken,
    pub card_type: CardNetwork,
    pub assigned_name: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
    pub default_payment_method: bool,
}

impl WalletCard {
    pub fn new(
        card_number_last_four: String,
        expiry_date: String,
        card_token: CardToken,
        card_type: CardNetwork,
        assigned_name: String,
        default_payment_method: bool,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            card_number_last_four,
            expiry_date,
            card_token,
            card_type,
            assigned_name,
            date_created: Utc::now(),
            date_updated: None,
            default_payment_method,
        }
    }

    /// Copy of this card promoted to default, with `date_updated` refreshed.
    pub(crate) fn with_default(&self) -> Self {
        Self {
            default_payment_method: true,
            date_updated: Some(Utc::now()),
            ..self.clone()
        }
    }

    /// Copy of this card demoted from default, with `date_updated` refreshed.
    pub(crate) fn without_default(&self) -> Self {
        Self {
            default_payment_method: false,
            date_updated: Some(Utc::now()),
            ..self.clone()
        }
    }

    /// Redacted label for logs. Never includes the card token.
    pub fn display_label(&self) -> String {
        format!(
            "{} {} \u{00b7}\u{00b7}\u{00b7}\u{00b7}{}",
            self.assigned_name,
            self.card_type.name(),
            self.card_number_last_four
        )
    }
}

impl Zeroize for WalletCard {
    fn zeroize(&mut self) {
        self.card_token.zeroize();
        self.card_number_last_four.zeroize();
        self.expiry_date.zeroize();
        self.assigned_name.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> WalletCard {
        WalletCard::new(
            "4242".to_string(),
            "12/30".to_string(),
            "tok_v1_9f2c7a".to_string(),
            CardNetwork::Visa,
            "Groceries".to_string(),
            false,
        )
    }

    #[test]
    fn test_card_creation() {
        let card = sample_card();

        assert_eq!(card.assigned_name, "Groceries");
        assert_eq!(card.card_type, CardNetwork::Visa);
        assert!(card.date_updated.is_none());
        assert!(!card.default_payment_method);
    }

    #[test]
    fn test_with_default_preserves_identity() {
        let card = sample_card();
        let promoted = card.with_default();

        assert_eq!(promoted.id, card.id);
        assert_eq!(promoted.date_created, card.date_created);
        assert!(promoted.default_payment_method);
        assert!(promoted.date_updated.is_some());
    }

    #[test]
    fn test_without_default_clears_flag() {
        let card = sample_card().with_default();
        let demoted = card.without_default();

        assert_eq!(demoted.id, card.id);
        assert!(!demoted.default_payment_method);
        assert!(demoted.date_updated.is_some());
    }

    #[test]
    fn test_display_label_redacts_token() {
        let card = sample_card();
        let label = card.display_label();

        assert!(label.contains("Groceries"));
        assert!(label.contains("4242"));
        assert!(!label.contains("tok_v1_9f2c7a"));
    }

    #[test]
    fn test_serialized_shape_for_storage_backends() {
        let card = sample_card();
        let json = serde_json::to_string(&card).expect("Failed to serialize card");

        // Persistent backends key on these field names.
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"card_token\""));
        assert!(json.contains("\"default_payment_method\""));
        assert!(json.contains("\"date_created\""));
    }

    #[test]
    fn test_zeroize_clears_sensitive_fields() {
        let mut card = sample_card();
        card.zeroize();

        assert!(card.card_token.is_empty());
        assert!(card.card_number_last_four.is_empty());
    }
}
