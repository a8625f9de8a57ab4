//! Decision rule applied when a proposal is closed.

use crate::types::ProposalStatus;

/// A proposal passes on a strict majority of cast votes. Ties, including
/// the no-vote case, are rejected.
pub fn outcome(votes_for: u32, votes_against: u32) -> ProposalStatus {
    if votes_for > votes_against {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Rejected
    }
}
