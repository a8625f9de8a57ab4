use soroban_sdk::{contracttype, Address, Env};

use crate::types::Proposal;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProposalCount,
    Proposal(u64),
    Vote(u64, Address), // (proposal_id, voter)
}

// ── Proposal ids ─────────────────────────────────────────────────────────────

pub fn next_proposal_id(env: &Env) -> u64 {
    shared::next_id(env, &DataKey::ProposalCount)
}

pub fn proposal_count(env: &Env) -> u64 {
    shared::last_id(env, &DataKey::ProposalCount)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    shared::bump_record(env, &key);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn has_vote(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn save_vote(env: &Env, proposal_id: u64, voter: &Address, choice: bool) {
    let key = DataKey::Vote(proposal_id, voter.clone());
    env.storage().persistent().set(&key, &choice);
    shared::bump_record(env, &key);
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<bool> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}
