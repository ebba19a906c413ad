//! Group configuration and the bounds every configuration value must respect.

use crate::error::GovernanceError;
use crate::proposal::ProposalType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest allowed voting period: 365 days.
pub const MAX_VOTING_PERIOD_SECS: u64 = 31_536_000;

/// Hard ceiling on the member limit.
pub const MAX_MEMBER_LIMIT: u64 = 100;

/// Thresholds are whole percentages.
pub const MAX_THRESHOLD_PCT: u64 = 100;

/// How approvals are weighted when a proposal is processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingStrategy {
    /// One vote per membership unit, compared against the member threshold.
    MemberCount,
    /// One vote per membership unit, passing on more than half of all members.
    SimpleMajority,
    /// Token weight, compared against the token threshold.
    TokenWeighted,
}

impl VotingStrategy {
    pub const ALL: [VotingStrategy; 3] = [
        Self::MemberCount,
        Self::SimpleMajority,
        Self::TokenWeighted,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u128) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn counts_members(&self) -> bool {
        !matches!(self, Self::TokenWeighted)
    }
}

/// Per-group governance configuration.
///
/// Only mutated by processed proposals of the matching configuration type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub voting_period_secs: u64,
    pub member_limit: u64,
    pub member_vote_threshold_pct: u64,
    pub token_vote_threshold_pct: u64,
    /// Strategy overrides; types not listed use [`VotingStrategy::MemberCount`].
    pub strategies: BTreeMap<ProposalType, VotingStrategy>,
    pub paused: bool,
    pub docs: String,
}

impl GroupConfig {
    pub fn strategy_for(&self, kind: ProposalType) -> VotingStrategy {
        self.strategies
            .get(&kind)
            .copied()
            .unwrap_or(VotingStrategy::MemberCount)
    }

    /// Check every bounded field.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        check_voting_period(self.voting_period_secs as u128)?;
        check_member_limit(self.member_limit as u128)?;
        check_threshold(self.member_vote_threshold_pct as u128)?;
        check_threshold(self.token_vote_threshold_pct as u128)?;
        Ok(())
    }
}

/// Voting period must lie in `(0, MAX_VOTING_PERIOD_SECS]`.
pub fn check_voting_period(secs: u128) -> Result<u64, GovernanceError> {
    if secs == 0 || secs > MAX_VOTING_PERIOD_SECS as u128 {
        return Err(GovernanceError::PeriodBounds(secs));
    }
    Ok(secs as u64)
}

/// Member limit must lie in `[1, MAX_MEMBER_LIMIT]`.
pub fn check_member_limit(limit: u128) -> Result<u64, GovernanceError> {
    if limit == 0 || limit > MAX_MEMBER_LIMIT as u128 {
        return Err(GovernanceError::MemberLimitBounds(limit));
    }
    Ok(limit as u64)
}

/// Thresholds must lie in `[1, 100]`.
pub fn check_threshold(pct: u128) -> Result<u64, GovernanceError> {
    if pct == 0 || pct > MAX_THRESHOLD_PCT as u128 {
        return Err(GovernanceError::ThresholdBounds(pct));
    }
    Ok(pct as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GroupConfig {
        GroupConfig {
            voting_period_secs: 3600,
            member_limit: 10,
            member_vote_threshold_pct: 50,
            token_vote_threshold_pct: 50,
            strategies: BTreeMap::new(),
            paused: false,
            docs: String::new(),
        }
    }

    #[test]
    fn period_bounds() {
        assert_eq!(check_voting_period(0), Err(GovernanceError::PeriodBounds(0)));
        assert_eq!(check_voting_period(1), Ok(1));
        assert_eq!(check_voting_period(31_536_000), Ok(31_536_000));
        assert!(check_voting_period(31_536_001).is_err());
    }

    #[test]
    fn member_limit_bounds() {
        assert!(check_member_limit(0).is_err());
        assert_eq!(check_member_limit(100), Ok(100));
        assert_eq!(
            check_member_limit(101),
            Err(GovernanceError::MemberLimitBounds(101))
        );
    }

    #[test]
    fn threshold_bounds() {
        assert!(check_threshold(0).is_err());
        assert_eq!(check_threshold(1), Ok(1));
        assert_eq!(check_threshold(100), Ok(100));
        assert_eq!(check_threshold(101), Err(GovernanceError::ThresholdBounds(101)));
    }

    #[test]
    fn strategy_defaults_to_member_count() {
        let mut cfg = config();
        assert_eq!(cfg.strategy_for(ProposalType::Call), VotingStrategy::MemberCount);
        cfg.strategies
            .insert(ProposalType::Call, VotingStrategy::TokenWeighted);
        assert_eq!(cfg.strategy_for(ProposalType::Call), VotingStrategy::TokenWeighted);
        assert_eq!(cfg.strategy_for(ProposalType::Mint), VotingStrategy::MemberCount);
    }

    #[test]
    fn validate_rejects_zero_threshold() {
        let mut cfg = config();
        assert!(cfg.validate().is_ok());
        cfg.token_vote_threshold_pct = 0;
        assert_eq!(cfg.validate(), Err(GovernanceError::ThresholdBounds(0)));
    }

    #[test]
    fn strategy_index_roundtrip() {
        for s in VotingStrategy::ALL {
            assert_eq!(VotingStrategy::from_index(s.index() as u128), Some(s));
        }
        assert_eq!(VotingStrategy::from_index(3), None);
    }
}
