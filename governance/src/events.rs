//! Events emitted for off-chain indexers and relayers.

use crate::config::VotingStrategy;
use crate::membership::WeightClass;
use crate::proposal::ProposalType;
use forum_types::{Address, Hash256, ProposalId};
use serde::{Deserialize, Serialize};

/// A configuration field that changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigChange {
    VotingPeriod(u64),
    MemberLimit(u64),
    MemberThreshold(u64),
    TokenThreshold(u64),
    VoteType {
        kind: ProposalType,
        strategy: VotingStrategy,
    },
    Paused(bool),
    Docs(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    ProposalCreated {
        id: ProposalId,
        kind: ProposalType,
    },
    ProposalProcessed {
        id: ProposalId,
        kind: ProposalType,
        passed: bool,
    },
    /// Removed by an ESCAPE proposal.
    ProposalCancelled {
        id: ProposalId,
        by: ProposalId,
    },
    DelegateChanged {
        delegator: Address,
        from: Option<Address>,
        to: Option<Address>,
    },
    ConfigChanged(ConfigChange),
    ExtensionToggled {
        extension: Address,
        enabled: bool,
    },
    /// `from: None` is a mint, `to: None` a burn.
    Transfer {
        from: Option<Address>,
        to: Option<Address>,
        class: WeightClass,
        amount: u128,
    },
    ContractSignatureSet {
        account: Address,
        hash: Hash256,
        approved: bool,
    },
}

impl GovernanceEvent {
    /// JSON form handed to indexers and relayers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
