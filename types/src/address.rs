//! Opaque 32-byte account identity.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An account identity: a group member, a call target or an extension.
///
/// Member addresses are derived from Ed25519 public keys by
/// `forum_crypto::derive_address`; any other 32 bytes are a valid address for
/// call targets and extensions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address, used as a placeholder in parallel proposal arrays.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Printed before the hex body.
    pub const PREFIX: &'static str = "0x";

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a 64-character hex string, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let body = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        let bytes = hex::decode(body).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypesError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_then_parse() {
        let addr = Address::new([0xAB; 32]);
        let printed = addr.to_string();
        assert!(printed.starts_with("0x"));
        assert_eq!(printed.parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn parse_without_prefix() {
        let hex_body = "11".repeat(32);
        assert_eq!(Address::from_hex(&hex_body).unwrap(), Address::new([0x11; 32]));
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Address::from_hex("0xabcd").unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(matches!(
            Address::from_hex("0xzz"),
            Err(TypesError::InvalidHex(_))
        ));
    }

    #[test]
    fn zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1; 32]).is_zero());
    }
}
