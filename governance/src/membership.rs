//! Membership units and token weight held by each account.
//!
//! Two independent weight classes are tracked: a binary membership unit
//! (in or out of the group) and fungible token weight. Delegation rules are
//! enforced by the caller; the ledger only knows balances.

use crate::error::GovernanceError;
use forum_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound on outstanding token weight. Keeps `votes * 100` in range
/// for every threshold comparison.
pub const MAX_TOTAL_TOKENS: u128 = u128::MAX / 100;

/// The two weight classes a group tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Membership,
    Token,
}

/// What a single account holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    pub membership: bool,
    pub tokens: u128,
}

impl Holdings {
    pub fn is_empty(&self) -> bool {
        !self.membership && self.tokens == 0
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MembershipLedger {
    holdings: BTreeMap<Address, Holdings>,
    member_count: u64,
    total_tokens: u128,
}

impl MembershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_member(&self, account: &Address) -> bool {
        self.holdings
            .get(account)
            .map(|h| h.membership)
            .unwrap_or(false)
    }

    pub fn holdings(&self, account: &Address) -> Holdings {
        self.holdings.get(account).copied().unwrap_or_default()
    }

    pub fn token_balance(&self, account: &Address) -> u128 {
        self.holdings(account).tokens
    }

    pub fn member_count(&self) -> u64 {
        self.member_count
    }

    pub fn total_tokens(&self) -> u128 {
        self.total_tokens
    }

    /// Current members in address order.
    pub fn members(&self) -> impl Iterator<Item = &Address> {
        self.holdings
            .iter()
            .filter(|(_, h)| h.membership)
            .map(|(addr, _)| addr)
    }

    /// Grant a membership unit. Returns `false` if `account` already held one.
    pub(crate) fn grant_membership(
        &mut self,
        account: &Address,
        member_limit: u64,
    ) -> Result<bool, GovernanceError> {
        if self.is_member(account) {
            return Ok(false);
        }
        let requested = self.member_count + 1;
        if requested > member_limit {
            return Err(GovernanceError::MemberLimitExceeded {
                limit: member_limit,
                requested,
            });
        }
        self.holdings.entry(*account).or_default().membership = true;
        self.member_count = requested;
        Ok(true)
    }

    /// Revoke a membership unit. Returns `false` if `account` held none.
    pub(crate) fn revoke_membership(&mut self, account: &Address) -> bool {
        let Some(h) = self.holdings.get_mut(account) else {
            return false;
        };
        if !h.membership {
            return false;
        }
        h.membership = false;
        self.member_count -= 1;
        self.prune(account);
        true
    }

    pub(crate) fn mint_tokens(
        &mut self,
        account: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        if amount == 0 {
            return Ok(());
        }
        let total = self
            .total_tokens
            .checked_add(amount)
            .filter(|t| *t <= MAX_TOTAL_TOKENS)
            .ok_or(GovernanceError::Overflow)?;
        let entry = self.holdings.entry(*account).or_default();
        // Bounded by the total, so this cannot overflow.
        entry.tokens += amount;
        self.total_tokens = total;
        Ok(())
    }

    pub(crate) fn burn_tokens(
        &mut self,
        account: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        let available = self.token_balance(account);
        if available < amount {
            return Err(GovernanceError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if amount == 0 {
            return Ok(());
        }
        if let Some(h) = self.holdings.get_mut(account) {
            h.tokens -= amount;
        }
        self.total_tokens -= amount;
        self.prune(account);
        Ok(())
    }

    pub(crate) fn transfer_tokens(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        let available = self.token_balance(from);
        if available < amount {
            return Err(GovernanceError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if amount == 0 || from == to {
            return Ok(());
        }
        if let Some(h) = self.holdings.get_mut(from) {
            h.tokens -= amount;
        }
        self.holdings.entry(*to).or_default().tokens += amount;
        self.prune(from);
        Ok(())
    }

    /// Move the membership unit of `from` to `to`. Member count is unchanged.
    pub(crate) fn transfer_membership(
        &mut self,
        from: &Address,
        to: &Address,
    ) -> Result<(), GovernanceError> {
        if !self.is_member(from) {
            return Err(GovernanceError::NotAMember(*from));
        }
        if self.is_member(to) {
            return Err(GovernanceError::AlreadyMember(*to));
        }
        if let Some(h) = self.holdings.get_mut(from) {
            h.membership = false;
        }
        self.holdings.entry(*to).or_default().membership = true;
        self.prune(from);
        Ok(())
    }

    /// Revoke membership and zero the token balance of `account`.
    pub(crate) fn remove(&mut self, account: &Address) -> Holdings {
        let removed = self.holdings.remove(account).unwrap_or_default();
        if removed.membership {
            self.member_count -= 1;
        }
        self.total_tokens -= removed.tokens;
        removed
    }

    fn prune(&mut self, account: &Address) {
        if self.holdings.get(account).is_some_and(|h| h.is_empty()) {
            self.holdings.remove(account);
        }
    }
}
