//! Cryptographic primitives for Forum group governance.
//!
//! - **Ed25519** for member signatures over proposal approvals
//! - **Blake2b-256** for address derivation and typed-message hashing
//! - A domain-separated proposal digest so that an approval signed for one
//!   proposal of one group can never validate for another
//! - The [`SignatureVerifier`] seam consumed by the governance engine

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;
pub mod typed;
pub mod verifier;

pub use address::derive_address;
pub use error::CryptoError;
pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
pub use typed::{domain_separator, proposal_struct_hash, signing_digest, PROPOSAL_TYPEHASH_PREIMAGE};
pub use verifier::{sign_proposal, Ed25519Verifier, ProposalSignature, SignatureVerifier};
