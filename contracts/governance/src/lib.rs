#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod proposals;
mod storage;
pub mod tally;
mod types;
mod votes;

pub use errors::GovernanceError;
pub use types::{Proposal, ProposalStatus};

#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContract {
    // ── Proposals ────────────────────────────────────────────────────────────

    /// Open a new proposal for voting. Any account may propose.
    ///
    /// Returns the new proposal id; ids are sequential starting at 1.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
    ) -> u64 {
        proposer.require_auth();

        let id = proposals::create(&env, proposer, title, description);
        shared::bump_instance(&env);
        id
    }

    /// Close an active proposal. It passes on a strict majority of `for`
    /// votes and is rejected otherwise. Anyone may close.
    pub fn close_proposal(env: Env, proposal_id: u64) -> Result<(), GovernanceError> {
        proposals::close(&env, proposal_id)?;
        shared::bump_instance(&env);
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        storage::get_proposal(&env, proposal_id)
    }

    /// Id of the most recently created proposal, 0 if none.
    pub fn get_proposal_count(env: Env) -> u64 {
        storage::proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Record `voter`'s choice on an active proposal. Each account votes at
    /// most once per proposal; a second vote is rejected, not overwritten.
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        choice: bool,
    ) -> Result<(), GovernanceError> {
        voter.require_auth();

        votes::cast(&env, &voter, proposal_id, choice)?;
        shared::bump_instance(&env);
        Ok(())
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<bool> {
        votes::choice_of(&env, proposal_id, &voter)
    }
}
