//! Group snapshot storage trait.

use crate::StoreError;
use forum_types::Address;

/// Trait for persisting serialized group state.
pub trait GroupStore {
    /// Store (or overwrite) the snapshot of a group.
    fn put_group(&self, address: &Address, snapshot: &[u8]) -> Result<(), StoreError>;

    /// Get the latest snapshot of a group.
    fn get_group(&self, address: &Address) -> Result<Vec<u8>, StoreError>;

    /// Remove a group. Fails with `NotFound` if it was never stored.
    fn delete_group(&self, address: &Address) -> Result<(), StoreError>;

    /// Addresses of all stored groups, in ascending order.
    fn list_groups(&self) -> Result<Vec<Address>, StoreError>;

    fn contains_group(&self, address: &Address) -> Result<bool, StoreError> {
        match self.get_group(address) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
