use soroban_sdk::{contracttype, Address, Env};

use crate::types::Property;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Minter,
    PropertyCount,
    Property(u64),
    Owner(u64),
}

// ── Minter ───────────────────────────────────────────────────────────────────

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

pub fn get_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Minter)
}

// ── Property ids ─────────────────────────────────────────────────────────────

pub fn next_property_id(env: &Env) -> u64 {
    shared::next_id(env, &DataKey::PropertyCount)
}

pub fn property_count(env: &Env) -> u64 {
    shared::last_id(env, &DataKey::PropertyCount)
}

// ── Ownership & metadata ─────────────────────────────────────────────────────

/// Write the owner mapping and the metadata for `property.id`. This is the
/// only writer of either entry.
pub fn save_property(env: &Env, property: &Property) {
    let owner_key = DataKey::Owner(property.id);
    let property_key = DataKey::Property(property.id);

    env.storage().persistent().set(&owner_key, &property.owner);
    env.storage().persistent().set(&property_key, property);

    shared::bump_record(env, &owner_key);
    shared::bump_record(env, &property_key);
}

pub fn get_owner(env: &Env, property_id: u64) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner(property_id))
}

pub fn get_property(env: &Env, property_id: u64) -> Option<Property> {
    env.storage()
        .persistent()
        .get(&DataKey::Property(property_id))
}
