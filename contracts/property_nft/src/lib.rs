//! Virtual property NFT contract.
//!
//! Each property is a non-fungible record with an owner and immutable
//! metadata. Only the designated minter, fixed when the contract is
//! deployed, can create properties; only the current owner can
//! transfer one.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod registry;
mod storage;
mod types;

pub use errors::PropertyError;
pub use types::Property;

#[contract]
pub struct PropertyNftContract;

#[contractimpl]
impl PropertyNftContract {
    // ── Deployment ───────────────────────────────────────────────────────────

    /// Fix the designated minter at deploy time. The minter cannot change
    /// afterwards.
    pub fn __constructor(env: Env, minter: Address) {
        storage::set_minter(&env, &minter);
        shared::bump_instance(&env);

        events::minter_set(&env, &minter);
    }

    pub fn get_minter(env: Env) -> Option<Address> {
        storage::get_minter(&env)
    }

    // ── Minting & transfers ──────────────────────────────────────────────────

    /// Mint a new property owned by `recipient`. `caller` must be the
    /// designated minter.
    ///
    /// # Arguments
    /// * `caller`        – Account invoking the mint
    /// * `recipient`     – Initial owner
    /// * `location`      – Where the property sits
    /// * `size`          – Positive size in whole units
    /// * `property_type` – Free-form kind, e.g. "commercial"
    pub fn mint(
        env: Env,
        caller: Address,
        recipient: Address,
        location: String,
        size: u64,
        property_type: String,
    ) -> Result<u64, PropertyError> {
        caller.require_auth();

        let id = registry::mint(&env, &caller, recipient, location, size, property_type)?;
        shared::bump_instance(&env);
        Ok(id)
    }

    pub fn transfer(
        env: Env,
        caller: Address,
        property_id: u64,
        recipient: Address,
    ) -> Result<(), PropertyError> {
        caller.require_auth();

        registry::transfer(&env, &caller, property_id, recipient)?;
        shared::bump_instance(&env);
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_owner(env: Env, property_id: u64) -> Option<Address> {
        storage::get_owner(&env, property_id)
    }

    pub fn get_property_metadata(env: Env, property_id: u64) -> Option<Property> {
        storage::get_property(&env, property_id)
    }

    /// Id of the most recently minted property, 0 if none.
    pub fn get_property_count(env: Env) -> u64 {
        storage::property_count(&env)
    }
}
