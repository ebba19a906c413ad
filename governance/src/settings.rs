//! Genesis settings for a group, loadable from TOML.
//!
//! ```toml
//! name = "garden-club"
//! chain_id = 1
//! member_vote_threshold_pct = 50
//!
//! [[members]]
//! address = "0x0101…"
//! tokens = 1000
//!
//! [[strategies]]
//! proposal_type = "call"
//! strategy = "token_weighted"
//! ```

use crate::config::{check_member_limit, check_threshold, check_voting_period, GroupConfig, VotingStrategy};
use crate::error::GovernanceError;
use crate::proposal::ProposalType;
use forum_crypto::blake2b_256_multi;
use forum_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Parameters a group is created with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupSettings {
    pub name: String,

    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Hex address of the group. Derived from name and chain id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default = "default_voting_period")]
    pub voting_period_secs: u64,

    #[serde(default = "default_member_limit")]
    pub member_limit: u64,

    #[serde(default = "default_threshold")]
    pub member_vote_threshold_pct: u64,

    #[serde(default = "default_threshold")]
    pub token_vote_threshold_pct: u64,

    #[serde(default)]
    pub docs: String,

    /// Hex addresses allowed to call the weight mint/burn hooks.
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub strategies: Vec<StrategyOverride>,

    #[serde(default)]
    pub members: Vec<GenesisMember>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisMember {
    pub address: String,
    #[serde(default)]
    pub tokens: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOverride {
    pub proposal_type: ProposalType,
    pub strategy: VotingStrategy,
}

/// Settings after parsing and bounds checks.
#[derive(Clone, Debug)]
pub struct ResolvedSettings {
    pub address: Address,
    pub name: String,
    pub chain_id: u64,
    pub config: GroupConfig,
    pub members: Vec<(Address, u128)>,
    pub extensions: BTreeSet<Address>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_chain_id() -> u64 {
    1
}

fn default_voting_period() -> u64 {
    3 * 24 * 60 * 60
}

fn default_member_limit() -> u64 {
    100
}

fn default_threshold() -> u64 {
    60
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GroupSettings {
    /// Settings with every optional field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain_id: default_chain_id(),
            address: None,
            voting_period_secs: default_voting_period(),
            member_limit: default_member_limit(),
            member_vote_threshold_pct: default_threshold(),
            token_vote_threshold_pct: default_threshold(),
            strategies: Vec::new(),
            docs: String::new(),
            members: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn from_toml_file(path: &str) -> Result<Self, GovernanceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GovernanceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Add a genesis member.
    pub fn with_member(mut self, address: &Address, tokens: u64) -> Self {
        self.members.push(GenesisMember {
            address: address.to_string(),
            tokens,
        });
        self
    }

    pub fn with_strategy(mut self, proposal_type: ProposalType, strategy: VotingStrategy) -> Self {
        self.strategies.push(StrategyOverride {
            proposal_type,
            strategy,
        });
        self
    }

    /// The group address: explicit if configured, otherwise
    /// `Blake2b("forum-group" || name || chain_id)`.
    pub fn group_address(&self) -> Result<Address, GovernanceError> {
        match &self.address {
            Some(hex) => parse_address(hex),
            None => Ok(Address::new(blake2b_256_multi(&[
                b"forum-group",
                self.name.as_bytes(),
                &self.chain_id.to_be_bytes(),
            ]))),
        }
    }

    /// Parse addresses and check every bound a group must start with.
    pub fn validate(&self) -> Result<ResolvedSettings, GovernanceError> {
        if self.name.is_empty() {
            return Err(GovernanceError::Config("group name is empty".into()));
        }
        let voting_period_secs = check_voting_period(self.voting_period_secs as u128)?;
        let member_limit = check_member_limit(self.member_limit as u128)?;
        let member_vote_threshold_pct = check_threshold(self.member_vote_threshold_pct as u128)?;
        let token_vote_threshold_pct = check_threshold(self.token_vote_threshold_pct as u128)?;

        if self.members.is_empty() {
            return Err(GovernanceError::Config("a group needs at least one member".into()));
        }
        let requested = self.members.len() as u64;
        if requested > member_limit {
            return Err(GovernanceError::MemberLimitExceeded {
                limit: member_limit,
                requested,
            });
        }

        let mut seen = BTreeSet::new();
        let mut members = Vec::with_capacity(self.members.len());
        for m in &self.members {
            let address = parse_address(&m.address)?;
            if !seen.insert(address) {
                return Err(GovernanceError::Config(format!(
                    "duplicate genesis member {address}"
                )));
            }
            members.push((address, m.tokens as u128));
        }

        let extensions = self
            .extensions
            .iter()
            .map(|hex| parse_address(hex))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let strategies: BTreeMap<_, _> = self
            .strategies
            .iter()
            .map(|o| (o.proposal_type, o.strategy))
            .collect();

        Ok(ResolvedSettings {
            address: self.group_address()?,
            name: self.name.clone(),
            chain_id: self.chain_id,
            config: GroupConfig {
                voting_period_secs,
                member_limit,
                member_vote_threshold_pct,
                token_vote_threshold_pct,
                strategies,
                paused: false,
                docs: self.docs.clone(),
            },
            members,
            extensions,
        })
    }
}

fn parse_address(hex: &str) -> Result<Address, GovernanceError> {
    Address::from_hex(hex).map_err(|e| GovernanceError::Config(format!("address {hex:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "garden-club"
chain_id = 5
member_vote_threshold_pct = 50
docs = "ipfs://charter"

[[members]]
address = "0x0101010101010101010101010101010101010101010101010101010101010101"
tokens = 11

[[members]]
address = "0x0202020202020202020202020202020202020202020202020202020202020202"
tokens = 10

[[strategies]]
proposal_type = "call"
strategy = "token_weighted"
"#;

    #[test]
    fn parses_sample_with_defaults() {
        let settings = GroupSettings::from_toml_str(SAMPLE).unwrap();
        assert_eq!(settings.chain_id, 5);
        assert_eq!(settings.voting_period_secs, 259_200);
        assert_eq!(settings.member_limit, 100);
        assert_eq!(settings.token_vote_threshold_pct, 60);

        let resolved = settings.validate().unwrap();
        assert_eq!(resolved.members.len(), 2);
        assert_eq!(resolved.members[0], (Address::new([1; 32]), 11));
        assert_eq!(
            resolved.config.strategy_for(ProposalType::Call),
            VotingStrategy::TokenWeighted
        );
        assert_eq!(resolved.config.docs, "ipfs://charter");
    }

    #[test]
    fn toml_roundtrip() {
        let settings = GroupSettings::from_toml_str(SAMPLE).unwrap();
        let text = settings.to_toml_string().unwrap();
        let reparsed = GroupSettings::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.members.len(), 2);
        assert_eq!(reparsed.strategies, settings.strategies);
    }

    #[test]
    fn derived_address_is_stable() {
        let a = GroupSettings::new("g").group_address().unwrap();
        let b = GroupSettings::new("g").group_address().unwrap();
        let mut other_chain = GroupSettings::new("g");
        other_chain.chain_id = 2;
        assert_eq!(a, b);
        assert_ne!(a, other_chain.group_address().unwrap());
    }

    #[test]
    fn rejects_too_many_members() {
        let mut settings = GroupSettings::new("g")
            .with_member(&Address::new([1; 32]), 0)
            .with_member(&Address::new([2; 32]), 0);
        settings.member_limit = 1;
        assert_eq!(
            settings.validate().unwrap_err(),
            GovernanceError::MemberLimitExceeded {
                limit: 1,
                requested: 2
            }
        );
    }

    #[test]
    fn rejects_duplicate_member() {
        let settings = GroupSettings::new("g")
            .with_member(&Address::new([1; 32]), 0)
            .with_member(&Address::new([1; 32]), 5);
        assert!(matches!(settings.validate(), Err(GovernanceError::Config(_))));
    }

    #[test]
    fn rejects_empty_group_and_bad_bounds() {
        assert!(matches!(
            GroupSettings::new("g").validate(),
            Err(GovernanceError::Config(_))
        ));
        let mut settings = GroupSettings::new("g").with_member(&Address::new([1; 32]), 0);
        settings.voting_period_secs = 0;
        assert_eq!(settings.validate().unwrap_err(), GovernanceError::PeriodBounds(0));
    }

    #[test]
    fn rejects_bad_address() {
        let mut settings = GroupSettings::new("g").with_member(&Address::new([1; 32]), 0);
        settings.extensions.push("0x1234".into());
        assert!(matches!(settings.validate(), Err(GovernanceError::Config(_))));
    }
}
