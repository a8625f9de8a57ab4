//! Vote ledger.
//!
//! This is the only writer of a proposal's `votes_for`/`votes_against`.
//! The vote record and the counter it feeds are written together, after
//! every check has passed, so the counters always equal the number of
//! recorded votes of each kind.

use soroban_sdk::{Address, Env};

use crate::errors::GovernanceError;
use crate::events;
use crate::proposals;
use crate::storage;

pub fn cast(
    env: &Env,
    voter: &Address,
    proposal_id: u64,
    choice: bool,
) -> Result<(), GovernanceError> {
    let mut proposal = proposals::load_active(env, proposal_id)?;

    if storage::has_vote(env, proposal_id, voter) {
        return Err(GovernanceError::AlreadyVoted);
    }

    if choice {
        proposal.votes_for += 1;
    } else {
        proposal.votes_against += 1;
    }

    storage::save_vote(env, proposal_id, voter, choice);
    storage::save_proposal(env, &proposal);

    events::vote_cast(
        env,
        proposal_id,
        voter,
        choice,
        proposal.votes_for,
        proposal.votes_against,
    );
    Ok(())
}

pub fn choice_of(env: &Env, proposal_id: u64, voter: &Address) -> Option<bool> {
    storage::get_vote(env, proposal_id, voter)
}
