use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a proposal. `Active` is the only initial state; the other
/// two are terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub proposer: Address,
    /// Number of recorded `true` votes
    pub votes_for: u32,
    /// Number of recorded `false` votes
    pub votes_against: u32,
    pub status: ProposalStatus,
}

impl Proposal {
    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }
}
