//! Nullable store: thread-safe in-memory snapshot storage for testing.

use forum_store::{GroupStore, StoreError};
use forum_types::Address;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// An in-memory group store for testing.
#[derive(Default)]
pub struct NullGroupStore {
    groups: Mutex<BTreeMap<Address, Vec<u8>>>,
}

impl NullGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn groups(&self) -> std::sync::MutexGuard<'_, BTreeMap<Address, Vec<u8>>> {
        self.groups.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GroupStore for NullGroupStore {
    fn put_group(&self, address: &Address, snapshot: &[u8]) -> Result<(), StoreError> {
        self.groups().insert(*address, snapshot.to_vec());
        Ok(())
    }

    fn get_group(&self, address: &Address) -> Result<Vec<u8>, StoreError> {
        self.groups()
            .get(address)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(address.to_string()))
    }

    fn delete_group(&self, address: &Address) -> Result<(), StoreError> {
        self.groups()
            .remove(address)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(address.to_string()))
    }

    fn list_groups(&self) -> Result<Vec<Address>, StoreError> {
        Ok(self.groups().keys().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_delete() {
        let store = NullGroupStore::new();
        let addr = Address::new([4; 32]);
        store.put_group(&addr, b"snapshot").unwrap();
        assert_eq!(store.get_group(&addr).unwrap(), b"snapshot");
        assert!(store.contains_group(&addr).unwrap());

        store.delete_group(&addr).unwrap();
        assert!(matches!(store.get_group(&addr), Err(StoreError::NotFound(_))));
        assert!(!store.contains_group(&addr).unwrap());
        assert!(store.delete_group(&addr).is_err());
    }

    #[test]
    fn lists_in_address_order() {
        let store = NullGroupStore::new();
        store.put_group(&Address::new([9; 32]), b"b").unwrap();
        store.put_group(&Address::new([1; 32]), b"a").unwrap();
        assert_eq!(
            store.list_groups().unwrap(),
            vec![Address::new([1; 32]), Address::new([9; 32])]
        );
    }
}
