//! Vote delegation between group members.
//!
//! Delegation is single-target and non-transitive: a member either votes
//! itself or hands its whole weight to exactly one other member who votes
//! directly. Consequently:
//! - a member that has delegators cannot delegate,
//! - nobody can delegate to a member that itself delegates,
//! - delegating again moves the whole weight to the new delegatee.
//!
//! Together these keep every delegation chain at length one, so cycles are
//! impossible by construction.

use crate::error::GovernanceError;
use forum_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Delegation edges plus the reverse index used to aggregate weight.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "DelegationSnapshot", into = "DelegationSnapshot")]
pub struct DelegationGraph {
    /// delegator → delegatee.
    delegations: BTreeMap<Address, Address>,
    /// delegatee → direct delegators.
    delegators: BTreeMap<Address, BTreeSet<Address>>,
}

impl DelegationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point `from` at `to`, replacing any existing delegation of `from`.
    /// Returns the delegatee it had before.
    pub(crate) fn delegate(
        &mut self,
        from: &Address,
        to: &Address,
    ) -> Result<Option<Address>, GovernanceError> {
        if from == to {
            return Err(GovernanceError::InvalidDelegate(
                "cannot delegate to self".into(),
            ));
        }
        if self.has_delegators(from) {
            return Err(GovernanceError::InvalidDelegate(format!(
                "{from} holds delegated votes and cannot delegate"
            )));
        }
        if let Some(onward) = self.delegations.get(to) {
            return Err(GovernanceError::InvalidDelegate(format!(
                "{to} delegates to {onward} and cannot receive delegation"
            )));
        }
        let previous = self.undelegate(from);
        self.delegations.insert(*from, *to);
        self.delegators.entry(*to).or_default().insert(*from);
        Ok(previous)
    }

    /// Remove `from`'s outgoing edge, returning the former delegatee.
    pub(crate) fn undelegate(&mut self, from: &Address) -> Option<Address> {
        let old_to = self.delegations.remove(from)?;
        if let Some(set) = self.delegators.get_mut(&old_to) {
            set.remove(from);
            if set.is_empty() {
                self.delegators.remove(&old_to);
            }
        }
        Some(old_to)
    }

    /// Sever the incoming edge `delegator → delegatee`.
    pub(crate) fn remove_delegator(
        &mut self,
        delegatee: &Address,
        delegator: &Address,
    ) -> Result<(), GovernanceError> {
        if self.delegations.get(delegator) != Some(delegatee) {
            return Err(GovernanceError::InvalidDelegate(format!(
                "{delegator} does not delegate to {delegatee}"
            )));
        }
        self.undelegate(delegator);
        Ok(())
    }

    pub fn delegatee_of(&self, delegator: &Address) -> Option<&Address> {
        self.delegations.get(delegator)
    }

    pub fn delegators_of(&self, delegatee: &Address) -> impl Iterator<Item = &Address> {
        self.delegators.get(delegatee).into_iter().flatten()
    }

    pub fn is_delegating(&self, account: &Address) -> bool {
        self.delegations.contains_key(account)
    }

    pub fn has_delegators(&self, account: &Address) -> bool {
        self.delegators.contains_key(account)
    }

    /// Whether `account` touches any delegation edge in either direction.
    pub fn has_edges(&self, account: &Address) -> bool {
        self.is_delegating(account) || self.has_delegators(account)
    }

    /// All edges as `(delegator, delegatee)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Address, &Address)> {
        self.delegations.iter()
    }

    pub fn len(&self) -> usize {
        self.delegations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegations.is_empty()
    }
}

/// Persisted form: forward edges only. The reverse index is rebuilt on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DelegationSnapshot {
    pub delegations: BTreeMap<Address, Address>,
}

impl From<DelegationSnapshot> for DelegationGraph {
    fn from(snapshot: DelegationSnapshot) -> Self {
        let mut delegators = BTreeMap::<Address, BTreeSet<Address>>::new();
        for (from, to) in &snapshot.delegations {
            delegators.entry(*to).or_default().insert(*from);
        }
        Self {
            delegations: snapshot.delegations,
            delegators,
        }
    }
}

impl From<DelegationGraph> for DelegationSnapshot {
    fn from(graph: DelegationGraph) -> Self {
        Self {
            delegations: graph.delegations,
        }
    }
}
