//! End-to-end walkthrough of the wallet card directory.
//!
//! Run with `RUST_LOG=info cargo run --bin wallet_demo`.

use anyhow::Result;
use cardkit_wallet_core::{init_wallet_core, CardNetwork, WalletCard};

#[tokio::main]
async fn main() -> Result<()> {
    cardkit_wallet_core::init();

    let wallet = init_wallet_core()?;

    let groceries = WalletCard::new(
        "4242".to_string(),
        "12/30".to_string(),
        "tok_v1_9f2c7a".to_string(),
        CardNetwork::Visa,
        "Groceries".to_string(),
        false,
    );
    let travel = WalletCard::new(
        "4444".to_string(),
        "03/29".to_string(),
        "tok_v1_b81d02".to_string(),
        CardNetwork::Mastercard,
        "Travel".to_string(),
        false,
    );
    let business = WalletCard::new(
        "0005".to_string(),
        "08/31".to_string(),
        "tok_v1_77aa19".to_string(),
        CardNetwork::Amex,
        "Business".to_string(),
        true,
    );

    // First card becomes the default automatically.
    wallet.add(groceries).await?;
    wallet.add(travel.clone()).await?;
    // An explicit default demotes the previous one.
    wallet.add(business.clone()).await?;

    let mut renamed = travel.clone();
    renamed.assigned_name = "Family trips".to_string();
    wallet.update(renamed).await?;

    // Removing the default shifts it to the highest-priority remainder.
    wallet.remove(&business).await?;

    println!("Cards in display order:");
    for card in wallet.get_all().await? {
        let marker = if card.default_payment_method { "*" } else { " " };
        println!("  {} {}", marker, card.display_label());
    }

    if let Some(default) = wallet.get_default().await? {
        println!("Default card: {}", default.display_label());
    }

    Ok(())
}
