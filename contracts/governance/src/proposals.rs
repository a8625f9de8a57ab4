use soroban_sdk::{Address, Env, String};

use crate::errors::GovernanceError;
use crate::events;
use crate::storage;
use crate::tally;
use crate::types::{Proposal, ProposalStatus};

pub fn create(env: &Env, proposer: Address, title: String, description: String) -> u64 {
    let id = storage::next_proposal_id(env);

    let proposal = Proposal {
        id,
        title,
        description,
        proposer: proposer.clone(),
        votes_for: 0,
        votes_against: 0,
        status: ProposalStatus::Active,
    };
    storage::save_proposal(env, &proposal);

    events::proposal_created(env, id, &proposer);
    id
}

/// Load a proposal that can still take votes or be closed.
pub fn load_active(env: &Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
    storage::get_proposal(env, proposal_id)
        .filter(Proposal::is_active)
        .ok_or(GovernanceError::NotFoundOrInactive)
}

/// Move an active proposal to its terminal status.
pub fn close(env: &Env, proposal_id: u64) -> Result<ProposalStatus, GovernanceError> {
    let mut proposal = load_active(env, proposal_id)?;

    proposal.status = tally::outcome(proposal.votes_for, proposal.votes_against);
    storage::save_proposal(env, &proposal);

    events::proposal_closed(env, proposal_id, proposal.status);
    Ok(proposal.status)
}
