//! Member address derivation.
//!
//! `address = Blake2b-256("forum-address" || public_key)`

use crate::hash::blake2b_256_multi;
use forum_types::{Address, PublicKey};

const ADDRESS_DOMAIN: &[u8] = b"forum-address";

/// Derive the member address controlled by a public key.
pub fn derive_address(public_key: &PublicKey) -> Address {
    Address::new(blake2b_256_multi(&[ADDRESS_DOMAIN, public_key.as_bytes()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keypair_from_seed;

    #[test]
    fn same_key_same_address() {
        let kp = keypair_from_seed(&[9u8; 32]);
        assert_eq!(derive_address(&kp.public), derive_address(&kp.public));
    }

    #[test]
    fn address_is_not_raw_key() {
        let kp = keypair_from_seed(&[9u8; 32]);
        assert_ne!(derive_address(&kp.public).as_bytes(), kp.public.as_bytes());
    }
}
