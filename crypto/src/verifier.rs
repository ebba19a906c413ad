//! Signature verification seam used by the governance engine.

use crate::address::derive_address;
use crate::error::CryptoError;
use crate::sign::{sign_message, verify_signature};
use crate::typed::{proposal_struct_hash, signing_digest};
use forum_types::{Address, Hash256, KeyPair, ProposalId, PublicKey, Signature};
use serde::{Deserialize, Serialize};

/// A detached approval: the claimed signer's public key and its signature
/// over the proposal's signing digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalSignature {
    pub signer: PublicKey,
    pub signature: Signature,
}

/// Recovers the signing member from an approval.
///
/// Implementations must fail with [`CryptoError::InvalidSignature`] when the
/// signature does not verify against
/// `signing_digest(domain_separator, struct_hash)`.
pub trait SignatureVerifier {
    fn recover(
        &self,
        domain_separator: &Hash256,
        struct_hash: &Hash256,
        signature: &ProposalSignature,
    ) -> Result<Address, CryptoError>;
}

/// Ed25519 verifier. The recovered identity is the address derived from the
/// claimed public key, returned only when the signature checks out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn recover(
        &self,
        domain_separator: &Hash256,
        struct_hash: &Hash256,
        signature: &ProposalSignature,
    ) -> Result<Address, CryptoError> {
        let digest = signing_digest(domain_separator, struct_hash);
        if !verify_signature(digest.as_bytes(), &signature.signature, &signature.signer) {
            return Err(CryptoError::InvalidSignature);
        }
        Ok(derive_address(&signature.signer))
    }
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for &V {
    fn recover(
        &self,
        domain_separator: &Hash256,
        struct_hash: &Hash256,
        signature: &ProposalSignature,
    ) -> Result<Address, CryptoError> {
        (**self).recover(domain_separator, struct_hash, signature)
    }
}

/// Produce a member's approval of proposal `id` in the group identified by
/// `domain_separator`.
pub fn sign_proposal(
    domain_separator: &Hash256,
    id: ProposalId,
    keypair: &KeyPair,
) -> ProposalSignature {
    let digest = signing_digest(domain_separator, &proposal_struct_hash(id));
    ProposalSignature {
        signer: keypair.public,
        signature: sign_message(digest.as_bytes(), &keypair.private),
    }
}
