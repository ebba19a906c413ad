//! Per-instance group state.
//!
//! A [`ForumGroup`] is the explicit context every engine operation runs
//! against: configuration, ledger, delegation graph, pending proposals and
//! allow-lists for one group. Several groups can live side by side in one
//! process. Fields are only mutated by [`GovernanceEngine`](crate::GovernanceEngine).

use crate::config::GroupConfig;
use crate::delegation::DelegationGraph;
use crate::error::GovernanceError;
use crate::events::GovernanceEvent;
use crate::membership::MembershipLedger;
use crate::proposal::{Proposal, ProposalStore};
use crate::settings::GroupSettings;
use forum_crypto::domain_separator;
use forum_types::{Address, Hash256, ProposalId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, TryLockError};

/// Voting weight a member would contribute if it signed right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectiveWeight {
    /// Weight under member-count strategies.
    pub member_votes: u64,
    /// Weight under the token-weighted strategy.
    pub token_votes: u128,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForumGroup {
    pub(crate) address: Address,
    pub(crate) name: String,
    pub(crate) chain_id: u64,
    pub(crate) domain_separator: Hash256,
    pub(crate) config: GroupConfig,
    pub(crate) ledger: MembershipLedger,
    pub(crate) delegation: DelegationGraph,
    pub(crate) proposals: ProposalStore,
    pub(crate) extensions: BTreeSet<Address>,
    pub(crate) contract_signatures: BTreeSet<(Address, Hash256)>,
    #[serde(skip)]
    pub(crate) events: Vec<GovernanceEvent>,
}

impl ForumGroup {
    /// Build a group from validated genesis settings.
    pub fn genesis(settings: &GroupSettings) -> Result<Self, GovernanceError> {
        let resolved = settings.validate()?;
        let mut ledger = MembershipLedger::new();
        for (account, tokens) in &resolved.members {
            ledger.grant_membership(account, resolved.config.member_limit)?;
            ledger.mint_tokens(account, *tokens)?;
        }
        Ok(Self {
            domain_separator: domain_separator(
                &resolved.name,
                resolved.chain_id,
                &resolved.address,
            ),
            address: resolved.address,
            name: resolved.name,
            chain_id: resolved.chain_id,
            config: resolved.config,
            ledger,
            delegation: DelegationGraph::new(),
            proposals: ProposalStore::new(),
            extensions: resolved.extensions,
            contract_signatures: BTreeSet::new(),
            events: Vec::new(),
        })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Domain every approval for this group is signed under.
    pub fn domain_separator(&self) -> &Hash256 {
        &self.domain_separator
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn ledger(&self) -> &MembershipLedger {
        &self.ledger
    }

    pub fn delegation(&self) -> &DelegationGraph {
        &self.delegation
    }

    pub fn proposals(&self) -> &ProposalStore {
        &self.proposals
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(id)
    }

    pub fn is_extension(&self, account: &Address) -> bool {
        self.extensions.contains(account)
    }

    /// Whether `hash` was pre-approved for `account` by an
    /// ALLOW_CONTRACT_SIGNATURE proposal.
    pub fn is_valid_signature(&self, account: &Address, hash: &Hash256) -> bool {
        self.contract_signatures.contains(&(*account, *hash))
    }

    /// Member-count weight: zero while delegating, otherwise the caller's own
    /// unit plus one per delegator holding a unit.
    pub fn member_votes(&self, account: &Address) -> u64 {
        if self.delegation.is_delegating(account) {
            return 0;
        }
        let own = u64::from(self.ledger.is_member(account));
        let delegated = self
            .delegation
            .delegators_of(account)
            .filter(|d| self.ledger.is_member(d))
            .count() as u64;
        own + delegated
    }

    /// Token weight: zero while delegating, otherwise own tokens plus every
    /// delegator's tokens. Bounded by the total supply.
    pub fn token_votes(&self, account: &Address) -> u128 {
        if self.delegation.is_delegating(account) {
            return 0;
        }
        self.delegation
            .delegators_of(account)
            .map(|d| self.ledger.token_balance(d))
            .fold(self.ledger.token_balance(account), u128::saturating_add)
    }

    pub fn effective_voting_weight(&self, account: &Address) -> EffectiveWeight {
        EffectiveWeight {
            member_votes: self.member_votes(account),
            token_votes: self.token_votes(account),
        }
    }

    /// Own holdings or delegated-in weight; anything else is not a member.
    pub(crate) fn has_voting_presence(&self, account: &Address) -> bool {
        !self.ledger.holdings(account).is_empty() || self.delegation.has_delegators(account)
    }

    pub(crate) fn emit(&mut self, event: GovernanceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GovernanceEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serialise the group for persistence. The event log is not included.
    pub fn save_state(&self) -> Result<Vec<u8>, GovernanceError> {
        bincode::serialize(self).map_err(|e| GovernanceError::Snapshot(e.to_string()))
    }

    pub fn load_state(data: &[u8]) -> Result<Self, GovernanceError> {
        bincode::deserialize(data).map_err(|e| GovernanceError::Snapshot(e.to_string()))
    }
}

/// A group behind a lock, for callers that hand the group to untrusted code.
///
/// Operations run serialized. Entry fails with [`GovernanceError::Reentrant`]
/// while another operation holds the group, which is exactly the situation
/// of a CALL target calling back in during dispatch.
#[derive(Clone)]
pub struct SharedGroup {
    inner: Arc<Mutex<ForumGroup>>,
}

impl SharedGroup {
    pub fn new(group: ForumGroup) -> Self {
        Self {
            inner: Arc::new(Mutex::new(group)),
        }
    }

    pub fn with_group<R>(
        &self,
        f: impl FnOnce(&mut ForumGroup) -> Result<R, GovernanceError>,
    ) -> Result<R, GovernanceError> {
        let mut group = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                tracing::warn!("rejected nested entry into a locked group");
                return Err(GovernanceError::Reentrant);
            }
            // Mutations are staged and committed whole, so a panicked
            // operation cannot have left partial state behind.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        f(&mut group)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Result<ForumGroup, GovernanceError> {
        self.with_group(|g| Ok(g.clone()))
    }
}
