//! Access control predicates shared by the ledger contracts.
//!
//! Everything here is pure: the caller passes in the principal that holds the
//! privilege (the configured minter, the recorded owner) and gets a yes/no
//! answer. An absent privilege holder matches nobody. Contracts map
//! [`AuthError`] into their own error enum so that authorization failures
//! never leak across domains.

#![no_std]

use soroban_sdk::Address;

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
}

/// True when `caller` is the designated minter.
pub fn is_designated_minter(caller: &Address, minter: Option<&Address>) -> bool {
    minter.map_or(false, |minter| minter == caller)
}

/// True when `caller` is the recorded owner.
pub fn is_current_owner(caller: &Address, owner: Option<&Address>) -> bool {
    owner.map_or(false, |owner| owner == caller)
}

/// Fails with [`AuthError::Unauthorized`] unless `caller` is the designated minter.
pub fn require_minter(caller: &Address, minter: Option<&Address>) -> Result<(), AuthError> {
    if !is_designated_minter(caller, minter) {
        return Err(AuthError::Unauthorized);
    }
    Ok(())
}

/// Fails with [`AuthError::Unauthorized`] unless `caller` is the recorded owner.
pub fn require_owner(caller: &Address, owner: Option<&Address>) -> Result<(), AuthError> {
    if !is_current_owner(caller, owner) {
        return Err(AuthError::Unauthorized);
    }
    Ok(())
}
