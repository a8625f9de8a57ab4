use soroban_sdk::contracterror;

/// Errors returned by the governance contract.
///
/// Codes are stable and part of the contract interface. They overlap with
/// the property contract's codes; the two enums are never mixed.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    /// The voter already has a recorded choice on this proposal
    AlreadyVoted = 100,
    /// No proposal under this id, or it is no longer active
    NotFoundOrInactive = 101,
}
