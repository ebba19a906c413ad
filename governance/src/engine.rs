//! Core governance engine: proposal creation, signature tallying, execution,
//! delegation and weight transfers.
//!
//! The engine holds only its collaborators (a [`SignatureVerifier`] and an
//! [`Invocable`] dispatcher). All state lives in the [`ForumGroup`] passed to
//! each operation. Every operation is all-or-nothing: proposal execution runs
//! against a staged copy of the group that is committed only on success.

use crate::config::{check_member_limit, check_threshold, check_voting_period, VotingStrategy};
use crate::dispatch::{call_failure, Invocable};
use crate::error::GovernanceError;
use crate::events::{ConfigChange, GovernanceEvent};
use crate::group::ForumGroup;
use crate::membership::WeightClass;
use crate::proposal::{Proposal, ProposalType, SignatureRecord};
use crate::settings::GroupSettings;
use forum_crypto::{proposal_struct_hash, ProposalSignature, SignatureVerifier};
use forum_types::{Address, Hash256, ProposalId, Timestamp};
use forum_utils::format_duration;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Result of collecting signatures for one proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    pub strategy: VotingStrategy,
    pub votes: u128,
    pub total: u128,
    /// Signers consumed by this tally, including earlier ones on record.
    pub record: SignatureRecord,
}

impl Tally {
    /// Compare against the threshold the strategy selects.
    ///
    /// `votes * 100 >= pct * total` for the percentage strategies and
    /// `votes * 2 > total` for simple majority. An empty electorate never
    /// passes.
    pub fn passes(&self, member_pct: u64, token_pct: u64) -> Result<bool, GovernanceError> {
        if self.total == 0 {
            return Ok(false);
        }
        let (lhs, rhs) = match self.strategy {
            VotingStrategy::MemberCount => (
                self.votes.checked_mul(100),
                self.total.checked_mul(member_pct as u128),
            ),
            VotingStrategy::SimpleMajority => (self.votes.checked_mul(2), Some(self.total)),
            VotingStrategy::TokenWeighted => (
                self.votes.checked_mul(100),
                self.total.checked_mul(token_pct as u128),
            ),
        };
        let (lhs, rhs) = lhs.zip(rhs).ok_or(GovernanceError::Overflow)?;
        Ok(match self.strategy {
            VotingStrategy::SimpleMajority => lhs > rhs,
            _ => lhs >= rhs,
        })
    }
}

pub struct GovernanceEngine<V, D> {
    verifier: V,
    dispatcher: D,
}

impl<V: SignatureVerifier, D: Invocable> GovernanceEngine<V, D> {
    pub fn new(verifier: V, dispatcher: D) -> Self {
        Self {
            verifier,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Create a group from genesis settings.
    pub fn init(&self, settings: &GroupSettings) -> Result<ForumGroup, GovernanceError> {
        let group = ForumGroup::genesis(settings)?;
        info!(
            group = %group.address(),
            name = group.name(),
            members = group.ledger().member_count(),
            "group initialised"
        );
        Ok(group)
    }

    // ── Proposals ──────────────────────────────────────────────────────

    /// Validate and store a new proposal. Creation is open to anyone; only
    /// processing needs approvals.
    pub fn propose(
        &self,
        group: &mut ForumGroup,
        kind: ProposalType,
        accounts: Vec<Address>,
        amounts: Vec<u128>,
        payloads: Vec<Vec<u8>>,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        check_proposal(kind, &accounts, &amounts, &payloads, group.proposals.next_id())?;
        let id = group
            .proposals
            .insert(kind, accounts, amounts, payloads, now)?;
        group.emit(GovernanceEvent::ProposalCreated { id, kind });
        info!(group = %group.address(), id, kind = kind.name(), "proposal created");
        Ok(id)
    }

    /// Collect the signers behind `signatures` and weigh them.
    ///
    /// Read-only. Fails on the first bad, repeated or non-member signature.
    pub fn tally(
        &self,
        group: &ForumGroup,
        proposal: &Proposal,
        signatures: &[ProposalSignature],
    ) -> Result<Tally, GovernanceError> {
        let strategy = group.config.strategy_for(proposal.kind);
        let struct_hash = proposal_struct_hash(proposal.id);
        let mut record = group
            .proposals
            .signature_record(proposal.id)
            .cloned()
            .unwrap_or_default();
        let mut votes: u128 = 0;

        for signature in signatures {
            let signer = self
                .verifier
                .recover(&group.domain_separator, &struct_hash, signature)
                .map_err(|e| {
                    warn!(id = proposal.id, error = %e, "signature rejected");
                    GovernanceError::InvalidSignature
                })?;
            if !record.consume(signer) {
                warn!(id = proposal.id, %signer, "duplicate signer");
                return Err(GovernanceError::SignatureReplay(signer));
            }
            if !group.has_voting_presence(&signer) {
                return Err(GovernanceError::NotAMember(signer));
            }
            let weight = if strategy.counts_members() {
                group.member_votes(&signer) as u128
            } else {
                group.token_votes(&signer)
            };
            debug!(id = proposal.id, %signer, weight, "signature counted");
            votes = votes.checked_add(weight).ok_or(GovernanceError::Overflow)?;
        }

        let total = if strategy.counts_members() {
            group.ledger.member_count() as u128
        } else {
            group.ledger.total_tokens()
        };
        Ok(Tally {
            strategy,
            votes,
            total,
            record,
        })
    }

    /// Tally approvals for proposal `id` and, if the threshold is met,
    /// execute it.
    ///
    /// Returns whether the proposal passed. Either way a tallied proposal is
    /// consumed. If execution aborts, the error is returned and the group is
    /// left exactly as it was, proposal included.
    pub fn process_proposal(
        &self,
        group: &mut ForumGroup,
        id: ProposalId,
        signatures: &[ProposalSignature],
    ) -> Result<bool, GovernanceError> {
        let proposal = group
            .proposals
            .get(id)
            .cloned()
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        let tally = self.tally(group, &proposal, signatures)?;
        let passed = tally.passes(
            group.config.member_vote_threshold_pct,
            group.config.token_vote_threshold_pct,
        )?;

        if passed {
            let mut staged = group.clone();
            staged.proposals.set_signature_record(id, tally.record.clone());
            if let Err(e) = self.execute(&mut staged, &proposal) {
                warn!(
                    group = %group.address(),
                    id,
                    kind = proposal.kind.name(),
                    error = %e,
                    "proposal execution aborted"
                );
                return Err(e);
            }
            *group = staged;
        }

        group.proposals.remove(id);
        group.emit(GovernanceEvent::ProposalProcessed {
            id,
            kind: proposal.kind,
            passed,
        });
        info!(
            group = %group.address(),
            id,
            kind = proposal.kind.name(),
            votes = tally.votes,
            total = tally.total,
            passed,
            "proposal processed"
        );
        Ok(passed)
    }

    fn execute(&self, group: &mut ForumGroup, proposal: &Proposal) -> Result<(), GovernanceError> {
        let accounts = &proposal.accounts;
        let amounts = &proposal.amounts;
        let payloads = &proposal.payloads;

        match proposal.kind {
            ProposalType::Mint => {
                let newcomers: BTreeSet<&Address> = accounts
                    .iter()
                    .filter(|a| !group.ledger.is_member(a))
                    .collect();
                let requested = group.ledger.member_count() + newcomers.len() as u64;
                if requested > group.config.member_limit {
                    return Err(GovernanceError::MemberLimitExceeded {
                        limit: group.config.member_limit,
                        requested,
                    });
                }
                for (account, amount) in accounts.iter().zip(amounts) {
                    mint_weight(group, account, WeightClass::Membership, 1, true)?;
                    mint_weight(group, account, WeightClass::Token, *amount, true)?;
                }
            }
            ProposalType::Burn => {
                for account in accounts {
                    if group.delegation.has_edges(account) {
                        return Err(GovernanceError::InvalidDelegate(format!(
                            "{account} has active delegation and cannot be burned"
                        )));
                    }
                    let removed = group.ledger.remove(account);
                    if removed.is_empty() {
                        return Err(GovernanceError::NotAMember(*account));
                    }
                    if removed.membership {
                        group.emit(burn_event(account, WeightClass::Membership, 1));
                    }
                    if removed.tokens > 0 {
                        group.emit(burn_event(account, WeightClass::Token, removed.tokens));
                    }
                }
            }
            ProposalType::Call => {
                for ((target, value), payload) in accounts.iter().zip(amounts).zip(payloads) {
                    debug!(id = proposal.id, to = %target, value, "dispatching call");
                    self.dispatcher
                        .invoke(target, *value, payload)
                        .map_err(|e| call_failure(target, e))?;
                }
            }
            ProposalType::SetVotingPeriod => {
                let secs = check_voting_period(amounts[0])?;
                group.config.voting_period_secs = secs;
                info!(period = %format_duration(secs), "voting period changed");
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::VotingPeriod(secs)));
            }
            ProposalType::SetMemberLimit => {
                let limit = check_member_limit(amounts[0])?;
                let count = group.ledger.member_count();
                if limit < count {
                    return Err(GovernanceError::MemberLimitExceeded {
                        limit,
                        requested: count,
                    });
                }
                group.config.member_limit = limit;
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::MemberLimit(limit)));
            }
            ProposalType::SetMemberThreshold => {
                let pct = check_threshold(amounts[0])?;
                group.config.member_vote_threshold_pct = pct;
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::MemberThreshold(pct)));
            }
            ProposalType::SetTokenThreshold => {
                let pct = check_threshold(amounts[0])?;
                group.config.token_vote_threshold_pct = pct;
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::TokenThreshold(pct)));
            }
            ProposalType::SetVoteType => {
                for pair in amounts.chunks_exact(2) {
                    let (kind, strategy) = decode_vote_type(pair[0], pair[1])?;
                    group.config.strategies.insert(kind, strategy);
                    group.emit(GovernanceEvent::ConfigChanged(ConfigChange::VoteType {
                        kind,
                        strategy,
                    }));
                }
            }
            ProposalType::SetPaused => {
                group.config.paused = !group.config.paused;
                info!(paused = group.config.paused, "pause state changed");
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::Paused(
                    group.config.paused,
                )));
            }
            ProposalType::ToggleExtension => {
                for extension in accounts {
                    let enabled = if group.extensions.remove(extension) {
                        false
                    } else {
                        group.extensions.insert(*extension);
                        true
                    };
                    info!(%extension, enabled, "extension toggled");
                    group.emit(GovernanceEvent::ExtensionToggled {
                        extension: *extension,
                        enabled,
                    });
                }
            }
            ProposalType::Escape => {
                let target = escape_target(amounts[0])?;
                group
                    .proposals
                    .remove(target)
                    .ok_or(GovernanceError::ProposalNotFound(target))?;
                info!(cancelled = target, by = proposal.id, "proposal cancelled");
                group.emit(GovernanceEvent::ProposalCancelled {
                    id: target,
                    by: proposal.id,
                });
            }
            ProposalType::SetDocs => {
                let docs = decode_docs(&payloads[0])?;
                group.config.docs = docs.clone();
                group.emit(GovernanceEvent::ConfigChanged(ConfigChange::Docs(docs)));
            }
            ProposalType::AllowContractSignature => {
                let account = accounts[0];
                let hash = decode_signature_hash(&payloads[0])?;
                let approved = amounts[0] != 0;
                if approved {
                    group.contract_signatures.insert((account, hash));
                } else {
                    group.contract_signatures.remove(&(account, hash));
                }
                group.emit(GovernanceEvent::ContractSignatureSet {
                    account,
                    hash,
                    approved,
                });
            }
        }
        Ok(())
    }

    // ── Delegation ─────────────────────────────────────────────────────

    /// Delegate `caller`'s voting weight to `to`, replacing any earlier
    /// delegation. Delegating to oneself clears it instead.
    pub fn delegate(
        &self,
        group: &mut ForumGroup,
        caller: &Address,
        to: &Address,
    ) -> Result<(), GovernanceError> {
        if !group.ledger.is_member(caller) {
            return Err(GovernanceError::NotAMember(*caller));
        }
        if caller == to {
            return self.undelegate(group, caller);
        }
        if !group.ledger.is_member(to) {
            return Err(GovernanceError::InvalidDelegate(format!(
                "delegatee {to} is not a member"
            )));
        }
        if group.delegation.delegatee_of(caller) == Some(to) {
            return Ok(());
        }
        let previous = group.delegation.delegate(caller, to)?;
        info!(delegator = %caller, delegatee = %to, "delegation set");
        group.emit(GovernanceEvent::DelegateChanged {
            delegator: *caller,
            from: previous,
            to: Some(*to),
        });
        Ok(())
    }

    /// Clear `caller`'s delegation, if any.
    pub fn undelegate(&self, group: &mut ForumGroup, caller: &Address) -> Result<(), GovernanceError> {
        if let Some(previous) = group.delegation.undelegate(caller) {
            info!(delegator = %caller, delegatee = %previous, "delegation cleared");
            group.emit(GovernanceEvent::DelegateChanged {
                delegator: *caller,
                from: Some(previous),
                to: None,
            });
        }
        Ok(())
    }

    /// Called by a delegatee to drop one of its delegators.
    pub fn remove_delegator(
        &self,
        group: &mut ForumGroup,
        caller: &Address,
        delegator: &Address,
    ) -> Result<(), GovernanceError> {
        group.delegation.remove_delegator(caller, delegator)?;
        info!(delegatee = %caller, %delegator, "delegator removed");
        group.emit(GovernanceEvent::DelegateChanged {
            delegator: *delegator,
            from: Some(*caller),
            to: None,
        });
        Ok(())
    }

    // ── Transfers and extension hooks ──────────────────────────────────

    /// Move token weight. Delegated totals of both parties follow
    /// automatically since they are derived from balances.
    pub fn transfer_tokens(
        &self,
        group: &mut ForumGroup,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        if group.config.paused {
            return Err(GovernanceError::Paused);
        }
        group.ledger.transfer_tokens(from, to, amount)?;
        group.emit(GovernanceEvent::Transfer {
            from: Some(*from),
            to: Some(*to),
            class: WeightClass::Token,
            amount,
        });
        Ok(())
    }

    /// Hand `from`'s membership unit to a non-member.
    pub fn transfer_membership(
        &self,
        group: &mut ForumGroup,
        from: &Address,
        to: &Address,
    ) -> Result<(), GovernanceError> {
        if group.config.paused {
            return Err(GovernanceError::Paused);
        }
        if group.delegation.has_edges(from) {
            return Err(GovernanceError::InvalidDelegate(format!(
                "{from} has active delegation and cannot transfer membership"
            )));
        }
        group.ledger.transfer_membership(from, to)?;
        info!(%from, %to, "membership transferred");
        group.emit(GovernanceEvent::Transfer {
            from: Some(*from),
            to: Some(*to),
            class: WeightClass::Membership,
            amount: 1,
        });
        Ok(())
    }

    /// Mint weight on behalf of an enabled extension.
    pub fn extension_mint(
        &self,
        group: &mut ForumGroup,
        caller: &Address,
        account: &Address,
        class: WeightClass,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        require_extension(group, caller)?;
        mint_weight(group, account, class, amount, false)
    }

    /// Burn weight on behalf of an enabled extension.
    pub fn extension_burn(
        &self,
        group: &mut ForumGroup,
        caller: &Address,
        account: &Address,
        class: WeightClass,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        require_extension(group, caller)?;
        match class {
            WeightClass::Membership => {
                check_membership_amount(amount)?;
                if group.delegation.has_edges(account) {
                    return Err(GovernanceError::InvalidDelegate(format!(
                        "{account} has active delegation and cannot be burned"
                    )));
                }
                if !group.ledger.revoke_membership(account) {
                    return Err(GovernanceError::NotAMember(*account));
                }
            }
            WeightClass::Token => group.ledger.burn_tokens(account, amount)?,
        }
        group.emit(burn_event(account, class, amount));
        Ok(())
    }
}

// ── Helpers ────────────────────────────────────────────────────────────

/// The shared mint hook. MINT proposals skip accounts that already hold a
/// unit; extensions are told with `AlreadyMember`.
fn mint_weight(
    group: &mut ForumGroup,
    account: &Address,
    class: WeightClass,
    amount: u128,
    skip_existing: bool,
) -> Result<(), GovernanceError> {
    match class {
        WeightClass::Membership => {
            check_membership_amount(amount)?;
            let granted = group
                .ledger
                .grant_membership(account, group.config.member_limit)?;
            if !granted {
                if skip_existing {
                    return Ok(());
                }
                return Err(GovernanceError::AlreadyMember(*account));
            }
        }
        WeightClass::Token => {
            if amount == 0 {
                return Ok(());
            }
            group.ledger.mint_tokens(account, amount)?;
        }
    }
    group.emit(GovernanceEvent::Transfer {
        from: None,
        to: Some(*account),
        class,
        amount,
    });
    Ok(())
}

fn burn_event(account: &Address, class: WeightClass, amount: u128) -> GovernanceEvent {
    GovernanceEvent::Transfer {
        from: Some(*account),
        to: None,
        class,
        amount,
    }
}

fn check_membership_amount(amount: u128) -> Result<(), GovernanceError> {
    if amount != 1 {
        return Err(GovernanceError::InvalidPayload(format!(
            "membership units are binary, got amount {amount}"
        )));
    }
    Ok(())
}

fn require_extension(group: &ForumGroup, caller: &Address) -> Result<(), GovernanceError> {
    if !group.is_extension(caller) {
        return Err(GovernanceError::NotExtension(*caller));
    }
    Ok(())
}

fn decode_vote_type(kind: u128, strategy: u128) -> Result<(ProposalType, VotingStrategy), GovernanceError> {
    let kind = ProposalType::from_index(kind)
        .ok_or_else(|| GovernanceError::TypeBounds(format!("no proposal type {kind}")))?;
    let strategy = VotingStrategy::from_index(strategy)
        .ok_or_else(|| GovernanceError::TypeBounds(format!("no voting strategy {strategy}")))?;
    Ok((kind, strategy))
}

fn escape_target(amount: u128) -> Result<ProposalId, GovernanceError> {
    ProposalId::try_from(amount)
        .map_err(|_| GovernanceError::TypeBounds(format!("no proposal id {amount}")))
}

fn decode_docs(payload: &[u8]) -> Result<String, GovernanceError> {
    String::from_utf8(payload.to_vec())
        .map_err(|e| GovernanceError::InvalidPayload(format!("docs are not UTF-8: {e}")))
}

fn decode_signature_hash(payload: &[u8]) -> Result<Hash256, GovernanceError> {
    Hash256::from_slice(payload).ok_or_else(|| {
        GovernanceError::InvalidPayload(format!(
            "contract signature hash must be 32 bytes, got {}",
            payload.len()
        ))
    })
}

/// Shape and bounds checks applied before a proposal is stored.
fn check_proposal(
    kind: ProposalType,
    accounts: &[Address],
    amounts: &[u128],
    payloads: &[Vec<u8>],
    own_id: ProposalId,
) -> Result<(), GovernanceError> {
    let arity = GovernanceError::ArrayArityMismatch {
        accounts: accounts.len(),
        amounts: amounts.len(),
        payloads: payloads.len(),
    };
    if accounts.len() != amounts.len() || amounts.len() != payloads.len() {
        return Err(arity);
    }
    if amounts.is_empty() && !kind.allows_empty() {
        return Err(arity);
    }

    match kind {
        ProposalType::SetVotingPeriod => {
            check_voting_period(amounts[0])?;
        }
        ProposalType::SetMemberLimit => {
            check_member_limit(amounts[0])?;
        }
        ProposalType::SetMemberThreshold | ProposalType::SetTokenThreshold => {
            check_threshold(amounts[0])?;
        }
        ProposalType::SetVoteType => {
            if amounts.len() % 2 != 0 {
                return Err(GovernanceError::TypeBounds(format!(
                    "expected (type, strategy) pairs, got {} values",
                    amounts.len()
                )));
            }
            for pair in amounts.chunks_exact(2) {
                decode_vote_type(pair[0], pair[1])?;
            }
        }
        ProposalType::Escape => {
            if escape_target(amounts[0])? == own_id {
                return Err(GovernanceError::TypeBounds(
                    "an escape proposal cannot cancel itself".into(),
                ));
            }
        }
        ProposalType::SetDocs => {
            decode_docs(&payloads[0])?;
        }
        ProposalType::AllowContractSignature => {
            decode_signature_hash(&payloads[0])?;
        }
        ProposalType::Mint
        | ProposalType::Burn
        | ProposalType::Call
        | ProposalType::SetPaused
        | ProposalType::ToggleExtension => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(strategy: VotingStrategy, votes: u128, total: u128) -> Tally {
        Tally {
            strategy,
            votes,
            total,
            record: SignatureRecord::default(),
        }
    }

    #[test]
    fn member_threshold_is_inclusive() {
        assert!(tally(VotingStrategy::MemberCount, 1, 2).passes(50, 50).unwrap());
        assert!(!tally(VotingStrategy::MemberCount, 1, 3).passes(50, 50).unwrap());
        assert!(tally(VotingStrategy::MemberCount, 1, 1).passes(100, 50).unwrap());
    }

    #[test]
    fn simple_majority_ignores_configured_pct() {
        // Half is not a majority.
        assert!(!tally(VotingStrategy::SimpleMajority, 2, 4).passes(1, 1).unwrap());
        assert!(tally(VotingStrategy::SimpleMajority, 3, 4).passes(100, 100).unwrap());
    }

    #[test]
    fn token_threshold() {
        assert!(!tally(VotingStrategy::TokenWeighted, 10, 21).passes(50, 50).unwrap());
        assert!(tally(VotingStrategy::TokenWeighted, 21, 21).passes(50, 50).unwrap());
        assert!(tally(VotingStrategy::TokenWeighted, 11, 21).passes(100, 50).unwrap());
    }

    #[test]
    fn empty_electorate_never_passes() {
        assert!(!tally(VotingStrategy::TokenWeighted, 0, 0).passes(1, 1).unwrap());
    }

    #[test]
    fn arity_mismatch() {
        let err = check_proposal(
            ProposalType::Mint,
            &[Address::ZERO],
            &[1, 2],
            &[vec![]],
            1,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GovernanceError::ArrayArityMismatch {
                accounts: 1,
                amounts: 2,
                payloads: 1
            }
        );
    }

    #[test]
    fn empty_arrays_only_for_pause() {
        assert!(check_proposal(ProposalType::SetPaused, &[], &[], &[], 1).is_ok());
        assert!(matches!(
            check_proposal(ProposalType::Mint, &[], &[], &[], 1),
            Err(GovernanceError::ArrayArityMismatch { .. })
        ));
    }

    #[test]
    fn vote_type_pairs() {
        let zero = [Address::ZERO, Address::ZERO];
        let empty = [vec![], vec![]];
        assert!(check_proposal(ProposalType::SetVoteType, &zero, &[2, 2], &empty, 1).is_ok());
        assert!(matches!(
            check_proposal(ProposalType::SetVoteType, &zero, &[13, 0], &empty, 1),
            Err(GovernanceError::TypeBounds(_))
        ));
        assert!(matches!(
            check_proposal(ProposalType::SetVoteType, &zero, &[0, 3], &empty, 1),
            Err(GovernanceError::TypeBounds(_))
        ));
        assert!(matches!(
            check_proposal(ProposalType::SetVoteType, &zero[..1], &[0], &empty[..1], 1),
            Err(GovernanceError::TypeBounds(_))
        ));
    }

    #[test]
    fn escape_cannot_target_itself() {
        assert!(matches!(
            check_proposal(ProposalType::Escape, &[Address::ZERO], &[4], &[vec![]], 4),
            Err(GovernanceError::TypeBounds(_))
        ));
        assert!(check_proposal(ProposalType::Escape, &[Address::ZERO], &[3], &[vec![]], 4).is_ok());
    }

    #[test]
    fn payload_shapes() {
        assert!(matches!(
            check_proposal(ProposalType::SetDocs, &[Address::ZERO], &[0], &[vec![0xff, 0xfe]], 1),
            Err(GovernanceError::InvalidPayload(_))
        ));
        assert!(matches!(
            check_proposal(
                ProposalType::AllowContractSignature,
                &[Address::ZERO],
                &[1],
                &[vec![0u8; 31]],
                1
            ),
            Err(GovernanceError::InvalidPayload(_))
        ));
    }
}
