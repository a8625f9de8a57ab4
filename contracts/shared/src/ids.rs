//! Sequential id allocation.
//!
//! Counters hold the last id handed out, start at 0 and are pre-incremented,
//! so the first id is 1 and ids are never reused. Callers allocate only after
//! every check of the operation has passed.

use soroban_sdk::{Env, IntoVal, Val};

/// Last id allocated under `key`, or 0 if none has been.
pub fn last_id<K>(env: &Env, key: &K) -> u64
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().get::<K, u64>(key).unwrap_or(0)
}

/// Allocate and persist the next id under `key`.
pub fn next_id<K>(env: &Env, key: &K) -> u64
where
    K: IntoVal<Env, Val>,
{
    let id = last_id(env, key) + 1;
    env.storage().instance().set(key, &id);
    id
}
