//! Canonical typed-message hashing for proposal approvals.
//!
//! Members sign `signing_digest(domain, proposal_struct_hash(id))`:
//!
//! ```text
//! domain  = H(DOMAIN_TYPEHASH || H(name) || chain_id_be || group_address)
//! struct  = H(PROPOSAL_TYPEHASH || proposal_id_be)
//! digest  = H(0x19 0x01 || domain || struct)
//! ```
//!
//! Binding the proposal id into the struct hash is what makes cross-proposal
//! replay impossible; binding the group address and chain id into the domain
//! does the same across groups and networks.

use crate::hash::{blake2b_256, blake2b_256_multi};
use forum_types::{Address, Hash256, ProposalId};

/// Preimage of the domain type hash.
pub const DOMAIN_TYPEHASH_PREIMAGE: &[u8] =
    b"ForumDomain(string name,uint64 chainId,address verifyingContract)";

/// Preimage of the proposal approval type hash.
pub const PROPOSAL_TYPEHASH_PREIMAGE: &[u8] = b"SignProposal(uint64 proposal)";

const DIGEST_PREFIX: &[u8] = &[0x19, 0x01];

/// Domain separator for one group instance on one network.
pub fn domain_separator(name: &str, chain_id: u64, group: &Address) -> Hash256 {
    let type_hash = blake2b_256(DOMAIN_TYPEHASH_PREIMAGE);
    let name_hash = blake2b_256(name.as_bytes());
    Hash256::new(blake2b_256_multi(&[
        &type_hash,
        &name_hash,
        &chain_id.to_be_bytes(),
        group.as_bytes(),
    ]))
}

/// Struct hash of an approval for proposal `id`.
pub fn proposal_struct_hash(id: ProposalId) -> Hash256 {
    let type_hash = blake2b_256(PROPOSAL_TYPEHASH_PREIMAGE);
    Hash256::new(blake2b_256_multi(&[&type_hash, &id.to_be_bytes()]))
}

/// The 32-byte digest a member actually signs.
pub fn signing_digest(domain: &Hash256, struct_hash: &Hash256) -> Hash256 {
    Hash256::new(blake2b_256_multi(&[
        DIGEST_PREFIX,
        domain.as_bytes(),
        struct_hash.as_bytes(),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_hash_binds_proposal_id() {
        assert_ne!(proposal_struct_hash(1), proposal_struct_hash(2));
        assert_eq!(proposal_struct_hash(7), proposal_struct_hash(7));
    }

    #[test]
    fn domain_binds_group_and_chain() {
        let a = Address::new([1; 32]);
        let b = Address::new([2; 32]);
        let base = domain_separator("forum", 1, &a);
        assert_ne!(base, domain_separator("forum", 1, &b));
        assert_ne!(base, domain_separator("forum", 5, &a));
        assert_ne!(base, domain_separator("other", 1, &a));
    }

    #[test]
    fn digest_depends_on_both_halves() {
        let domain = domain_separator("forum", 1, &Address::new([1; 32]));
        let d1 = signing_digest(&domain, &proposal_struct_hash(1));
        let d2 = signing_digest(&domain, &proposal_struct_hash(2));
        let d3 = signing_digest(&Hash256::ZERO, &proposal_struct_hash(1));
        assert_ne!(d1, d2);
        assert_ne!(d1, d3);
    }
}
