//! Constants for the wallet card directory

// Wallet constants
pub const DEFAULT_MAX_WALLET_CARDS: usize = 20;

// Environment keys
pub const ENV_MAX_WALLET_CARDS: &str = "WALLET_CORE_MAX_CARDS";
