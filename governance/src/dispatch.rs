//! External-call seam for CALL proposals.
//!
//! Call targets are untrusted. Every dispatch happens while the group is
//! locked (see [`SharedGroup`](crate::group::SharedGroup)), so a target that
//! tries to call back into the group gets [`GovernanceError::Reentrant`].

use crate::error::GovernanceError;
use forum_types::Address;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The target rejected the call.
    #[error("reverted: {0}")]
    Reverted(String),

    /// The target called back into governance and was refused.
    #[error(transparent)]
    Governance(#[from] GovernanceError),
}

/// Something that can deliver `payload` with `value` to `target`.
pub trait Invocable {
    fn invoke(&self, target: &Address, value: u128, payload: &[u8]) -> Result<Vec<u8>, CallError>;
}

impl<T: Invocable + ?Sized> Invocable for &T {
    fn invoke(&self, target: &Address, value: u128, payload: &[u8]) -> Result<Vec<u8>, CallError> {
        (**self).invoke(target, value, payload)
    }
}

impl<T: Invocable + ?Sized> Invocable for std::sync::Arc<T> {
    fn invoke(&self, target: &Address, value: u128, payload: &[u8]) -> Result<Vec<u8>, CallError> {
        (**self).invoke(target, value, payload)
    }
}

/// Map a dispatch failure onto the governance error that aborts the batch.
pub(crate) fn call_failure(target: &Address, err: CallError) -> GovernanceError {
    match err {
        CallError::Governance(inner) => inner,
        CallError::Reverted(reason) => GovernanceError::CallFailed {
            target: *target,
            reason,
        },
    }
}
