use forum_types::{Address, ProposalId};
use thiserror::Error;

/// Coarse classification of a [`GovernanceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected at `propose` time; no proposal was created.
    InputValidation,
    /// Rejected while collecting signatures; nothing was tallied.
    Authorization,
    /// A state invariant would break; execution was aborted.
    StateInvariant,
    /// An external call failed; the whole batch was aborted.
    ExternalCall,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("array arity mismatch: {accounts} accounts, {amounts} amounts, {payloads} payloads")]
    ArrayArityMismatch {
        accounts: usize,
        amounts: usize,
        payloads: usize,
    },

    #[error("voting period {0} out of bounds")]
    PeriodBounds(u128),

    #[error("threshold {0} out of bounds")]
    ThresholdBounds(u128),

    #[error("member limit {0} out of bounds")]
    MemberLimitBounds(u128),

    #[error("invalid proposal type or voting strategy: {0}")]
    TypeBounds(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("signature from {0} already counted for this proposal")]
    SignatureReplay(Address),

    #[error("{0} is not a member")]
    NotAMember(Address),

    #[error("invalid delegate: {0}")]
    InvalidDelegate(String),

    #[error("member limit exceeded: limit {limit}, would have {requested}")]
    MemberLimitExceeded { limit: u64, requested: u64 },

    #[error("{0} already holds a membership unit")]
    AlreadyMember(Address),

    #[error("reentrant call rejected")]
    Reentrant,

    #[error("call to {target} failed: {reason}")]
    CallFailed { target: Address, reason: String },

    #[error("transfers are paused")]
    Paused,

    #[error("{0} is not an enabled extension")]
    NotExtension(Address),

    #[error("insufficient token weight: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("arithmetic overflow in weight accounting")]
    Overflow,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl GovernanceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArrayArityMismatch { .. }
            | Self::PeriodBounds(_)
            | Self::ThresholdBounds(_)
            | Self::MemberLimitBounds(_)
            | Self::TypeBounds(_)
            | Self::InvalidPayload(_)
            | Self::Config(_) => ErrorCategory::InputValidation,
            Self::ProposalNotFound(_)
            | Self::InvalidSignature
            | Self::SignatureReplay(_)
            | Self::NotAMember(_)
            | Self::NotExtension(_) => ErrorCategory::Authorization,
            Self::InvalidDelegate(_)
            | Self::MemberLimitExceeded { .. }
            | Self::AlreadyMember(_)
            | Self::Reentrant
            | Self::Paused
            | Self::InsufficientBalance { .. }
            | Self::Overflow
            | Self::Snapshot(_) => ErrorCategory::StateInvariant,
            Self::CallFailed { .. } => ErrorCategory::ExternalCall,
        }
    }
}
