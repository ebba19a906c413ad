//! Governance core for Forum groups.
//!
//! A group is a multisig-style DAO. Anyone may create a proposal; members
//! approve it off-chain by signing `{domain, proposal id}` and a relayer
//! submits the batch of signatures to [`GovernanceEngine::process_proposal`].
//! Approvals are weighed by one of three strategies per proposal type:
//! member count against a percentage, simple majority of members, or token
//! weight against a percentage. Members can delegate their weight one level
//! deep.
//!
//! All state for one group lives in a [`ForumGroup`]; the engine is
//! stateless apart from its verifier and call dispatcher.

pub mod config;
pub mod delegation;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod events;
pub mod group;
pub mod membership;
pub mod proposal;
pub mod settings;

pub use config::{GroupConfig, VotingStrategy};
pub use delegation::DelegationGraph;
pub use dispatch::{CallError, Invocable};
pub use engine::{GovernanceEngine, Tally};
pub use error::{ErrorCategory, GovernanceError};
pub use events::{ConfigChange, GovernanceEvent};
pub use group::{EffectiveWeight, ForumGroup, SharedGroup};
pub use membership::{Holdings, MembershipLedger, WeightClass, MAX_TOTAL_TOKENS};
pub use proposal::{Proposal, ProposalStore, ProposalType, SignatureRecord};
pub use settings::{GenesisMember, GroupSettings, ResolvedSettings, StrategyOverride};
