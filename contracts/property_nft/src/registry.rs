//! Ownership registry for virtual properties.
//!
//! Every check runs before the first write, and the owner mapping and the
//! metadata are always written together through `storage::save_property`.

use soroban_sdk::{Address, Env, String};

use crate::errors::PropertyError;
use crate::events;
use crate::storage;
use crate::types::Property;

pub fn mint(
    env: &Env,
    caller: &Address,
    recipient: Address,
    location: String,
    size: u64,
    property_type: String,
) -> Result<u64, PropertyError> {
    let minter = storage::get_minter(env);
    access_control::require_minter(caller, minter.as_ref())?;

    if size == 0 {
        return Err(PropertyError::InvalidSize);
    }

    let id = storage::next_property_id(env);
    let property = Property {
        id,
        owner: recipient.clone(),
        location,
        size,
        property_type,
    };
    storage::save_property(env, &property);

    events::minted(env, id, &recipient, size);
    Ok(id)
}

/// Hand `property_id` over to `recipient`. Only the current owner may do
/// this; an unknown id has no owner and is rejected the same way.
pub fn transfer(
    env: &Env,
    caller: &Address,
    property_id: u64,
    recipient: Address,
) -> Result<(), PropertyError> {
    let owner = storage::get_owner(env, property_id);
    access_control::require_owner(caller, owner.as_ref())?;

    let mut property =
        storage::get_property(env, property_id).ok_or(PropertyError::Unauthorized)?;
    property.owner = recipient;
    storage::save_property(env, &property);

    events::transferred(env, property_id, caller, &property.owner);
    Ok(())
}
