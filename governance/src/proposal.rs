//! Proposals, their store, and per-proposal signature records.

use crate::error::GovernanceError;
use forum_types::{Address, ProposalId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Every action a group can vote on.
///
/// The numeric index (declaration order) is what SET_VOTE_TYPE proposals
/// carry in their `amounts` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalType {
    Mint,
    Burn,
    Call,
    SetVotingPeriod,
    SetMemberLimit,
    SetMemberThreshold,
    SetTokenThreshold,
    SetVoteType,
    SetPaused,
    ToggleExtension,
    Escape,
    SetDocs,
    AllowContractSignature,
}

impl ProposalType {
    pub const ALL: [ProposalType; 13] = [
        Self::Mint,
        Self::Burn,
        Self::Call,
        Self::SetVotingPeriod,
        Self::SetMemberLimit,
        Self::SetMemberThreshold,
        Self::SetTokenThreshold,
        Self::SetVoteType,
        Self::SetPaused,
        Self::ToggleExtension,
        Self::Escape,
        Self::SetDocs,
        Self::AllowContractSignature,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u128) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Burn => "burn",
            Self::Call => "call",
            Self::SetVotingPeriod => "set_voting_period",
            Self::SetMemberLimit => "set_member_limit",
            Self::SetMemberThreshold => "set_member_threshold",
            Self::SetTokenThreshold => "set_token_threshold",
            Self::SetVoteType => "set_vote_type",
            Self::SetPaused => "set_paused",
            Self::ToggleExtension => "toggle_extension",
            Self::Escape => "escape",
            Self::SetDocs => "set_docs",
            Self::AllowContractSignature => "allow_contract_signature",
        }
    }

    /// Whether a proposal of this type may carry empty arrays.
    pub fn allows_empty(&self) -> bool {
        matches!(self, Self::SetPaused)
    }
}

/// A pending governance action.
///
/// `accounts`, `amounts` and `payloads` are parallel arrays and always have
/// the same length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub kind: ProposalType,
    pub accounts: Vec<Address>,
    pub amounts: Vec<u128>,
    pub payloads: Vec<Vec<u8>>,
    pub created_at: Timestamp,
}

/// Signers already counted toward one proposal.
///
/// Append-only while the proposal lives; dropped with the proposal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    consumed: BTreeSet<Address>,
}

impl SignatureRecord {
    /// Mark `signer` as counted. Returns `false` if it already was.
    pub fn consume(&mut self, signer: Address) -> bool {
        self.consumed.insert(signer)
    }

    pub fn contains(&self, signer: &Address) -> bool {
        self.consumed.contains(signer)
    }

    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}

/// Pending proposals keyed by id.
///
/// A processed or cancelled proposal is removed, so absence is the
/// "cannot process again" signal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalStore {
    next_id: ProposalId,
    proposals: BTreeMap<ProposalId, Proposal>,
    signatures: BTreeMap<ProposalId, SignatureRecord>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            proposals: BTreeMap::new(),
            signatures: BTreeMap::new(),
        }
    }

    /// The id the next inserted proposal will receive.
    pub fn next_id(&self) -> ProposalId {
        self.next_id
    }

    pub(crate) fn insert(
        &mut self,
        kind: ProposalType,
        accounts: Vec<Address>,
        amounts: Vec<u128>,
        payloads: Vec<Vec<u8>>,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(GovernanceError::Overflow)?;
        self.proposals.insert(
            id,
            Proposal {
                id,
                kind,
                accounts,
                amounts,
                payloads,
                created_at: now,
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    pub fn contains(&self, id: ProposalId) -> bool {
        self.proposals.contains_key(&id)
    }

    /// Delete a proposal together with its signature record.
    pub(crate) fn remove(&mut self, id: ProposalId) -> Option<Proposal> {
        self.signatures.remove(&id);
        self.proposals.remove(&id)
    }

    pub fn signature_record(&self, id: ProposalId) -> Option<&SignatureRecord> {
        self.signatures.get(&id)
    }

    /// Replace the signature record of a live proposal.
    pub(crate) fn set_signature_record(&mut self, id: ProposalId, record: SignatureRecord) {
        if self.proposals.contains_key(&id) {
            self.signatures.insert(id, record);
        }
    }

    pub fn pending_ids(&self) -> impl Iterator<Item = ProposalId> + '_ {
        self.proposals.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}

impl Default for ProposalStore {
    fn default() -> Self {
        Self::new()
    }
}
