use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterSet {
    pub minter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyMinted {
    #[topic]
    pub property_id: u64,
    pub recipient: Address,
    pub size: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyTransferred {
    #[topic]
    pub property_id: u64,
    pub from: Address,
    pub to: Address,
}

pub fn minter_set(env: &Env, minter: &Address) {
    MinterSet {
        minter: minter.clone(),
    }
    .publish(env);
}

pub fn minted(env: &Env, property_id: u64, recipient: &Address, size: u64) {
    PropertyMinted {
        property_id,
        recipient: recipient.clone(),
        size,
    }
    .publish(env);
}

pub fn transferred(env: &Env, property_id: u64, from: &Address, to: &Address) {
    PropertyTransferred {
        property_id,
        from: from.clone(),
        to: to.clone(),
    }
    .publish(env);
}
