use soroban_sdk::{contractevent, Address, Env};

use crate::types::ProposalStatus;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub proposal_id: u64,
    #[topic]
    pub voter: Address,
    pub choice: bool,
    pub votes_for: u32,
    pub votes_against: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalClosed {
    #[topic]
    pub proposal_id: u64,
    pub status: ProposalStatus,
}

pub fn proposal_created(env: &Env, proposal_id: u64, proposer: &Address) {
    ProposalCreated {
        proposal_id,
        proposer: proposer.clone(),
    }
    .publish(env);
}

pub fn vote_cast(
    env: &Env,
    proposal_id: u64,
    voter: &Address,
    choice: bool,
    votes_for: u32,
    votes_against: u32,
) {
    VoteCast {
        proposal_id,
        voter: voter.clone(),
        choice,
        votes_for,
        votes_against,
    }
    .publish(env);
}

pub fn proposal_closed(env: &Env, proposal_id: u64, status: ProposalStatus) {
    ProposalClosed {
        proposal_id,
        status,
    }
    .publish(env);
}
