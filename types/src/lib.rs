//! Fundamental types for Forum group governance.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: member addresses, 32-byte hashes, proposal ids, timestamps and
//! the raw key/signature byte containers.

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod time;

pub use address::Address;
pub use error::TypesError;
pub use hash::Hash256;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use time::Timestamp;

/// Sequential proposal identifier. Ids start at 1 and are never reused.
pub type ProposalId = u64;
