//! Abstract storage traits for Forum groups.
//!
//! Backends persist opaque group snapshots keyed by group address. The
//! governance crate produces and consumes the bytes; stores never interpret
//! them.

pub mod error;
pub mod group;

pub use error::StoreError;
pub use group::GroupStore;
