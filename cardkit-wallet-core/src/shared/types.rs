use serde::{Deserialize, Serialize};

// Basic types for wallet card operations
pub type CardId = uuid::Uuid;
pub type CardToken = String;

// Card network codes as issued by the payment gateway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    Unknown,
    Visa,
    Mastercard,
    Amex,
    Maestro,
    Discover,
    DinersClub,
    Jcb,
}

impl CardNetwork {
    /// Stable integer code used on the wire and in stored records.
    pub fn code(&self) -> i32 {
        match self {
            CardNetwork::Unknown => 0,
            CardNetwork::Visa => 1,
            CardNetwork::Mastercard => 2,
            CardNetwork::Amex => 3,
            CardNetwork::Maestro => 4,
            CardNetwork::Discover => 5,
            CardNetwork::DinersClub => 6,
            CardNetwork::Jcb => 7,
        }
    }

    /// Decode a stored network code; unrecognized codes map to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => CardNetwork::Visa,
            2 => CardNetwork::Mastercard,
            3 => CardNetwork::Amex,
            4 => CardNetwork::Maestro,
            5 => CardNetwork::Discover,
            6 => CardNetwork::DinersClub,
            7 => CardNetwork::Jcb,
            _ => CardNetwork::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardNetwork::Unknown => "Unknown",
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::Amex => "American Express",
            CardNetwork::Maestro => "Maestro",
            CardNetwork::Discover => "Discover",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Jcb => "JCB",
        }
    }
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_codes() {
        assert_eq!(CardNetwork::Visa.code(), 1);
        assert_eq!(CardNetwork::Mastercard.code(), 2);
        assert_eq!(CardNetwork::from_code(3), CardNetwork::Amex);
    }

    #[test]
    fn test_unrecognized_code_maps_to_unknown() {
        assert_eq!(CardNetwork::from_code(42), CardNetwork::Unknown);
        assert_eq!(CardNetwork::from_code(-1), CardNetwork::Unknown);
    }

    #[test]
    fn test_network_names() {
        assert_eq!(CardNetwork::Visa.name(), "Visa");
        assert_eq!(CardNetwork::Amex.name(), "American Express");
    }
}
