//! Nullable infrastructure for deterministic testing.
//!
//! The governance engine reaches the outside world through a clock, a call
//! dispatcher and a snapshot store. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Record what they were asked to do
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod dispatch;
pub mod store;

pub use clock::NullClock;
pub use dispatch::{NullDispatcher, RecordedCall};
pub use store::NullGroupStore;
