use soroban_sdk::{contracttype, Address, String};

/// Metadata of a minted virtual property.
///
/// `owner` mirrors the owner mapping and is only ever written together
/// with it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub id: u64,
    pub owner: Address,
    pub location: String,
    pub size: u64,
    pub property_type: String,
}
