//! Nullable call dispatcher: record CALL proposals instead of executing them.

use forum_governance::{CallError, Invocable};
use forum_types::Address;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One delivered call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub target: Address,
    pub value: u128,
    pub payload: Vec<u8>,
}

/// A dispatcher that records every call and reverts for configured targets.
///
/// Reverted calls are not recorded.
#[derive(Default)]
pub struct NullDispatcher {
    calls: Mutex<Vec<RecordedCall>>,
    reverting: Mutex<BTreeSet<Address>>,
}

impl NullDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future call to `target` revert.
    pub fn revert_on(&self, target: Address) {
        lock(&self.reverting).insert(target);
    }

    /// All successful calls, in delivery order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn reset(&self) {
        lock(&self.calls).clear();
        lock(&self.reverting).clear();
    }
}

impl Invocable for NullDispatcher {
    fn invoke(&self, target: &Address, value: u128, payload: &[u8]) -> Result<Vec<u8>, CallError> {
        if lock(&self.reverting).contains(target) {
            return Err(CallError::Reverted(format!("{target} is set to revert")));
        }
        lock(&self.calls).push(RecordedCall {
            target: *target,
            value,
            payload: payload.to_vec(),
        });
        Ok(Vec::new())
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_reverts() {
        let dispatcher = NullDispatcher::new();
        let (ok, bad) = (Address::new([1; 32]), Address::new([2; 32]));
        dispatcher.revert_on(bad);

        assert!(dispatcher.invoke(&ok, 5, b"ping").is_ok());
        assert!(matches!(
            dispatcher.invoke(&bad, 0, b""),
            Err(CallError::Reverted(_))
        ));
        assert_eq!(
            dispatcher.calls(),
            vec![RecordedCall {
                target: ok,
                value: 5,
                payload: b"ping".to_vec()
            }]
        );

        dispatcher.reset();
        assert!(dispatcher.calls().is_empty());
        assert!(dispatcher.invoke(&bad, 0, b"").is_ok());
    }
}
