//! Ledger TTL management.
//!
//! At ~5s per ledger a day is 17,280 ledgers. Instance entries (counters and
//! configuration) are bumped on every mutating call; records are bumped
//! whenever they are written.

use soroban_sdk::{Env, IntoVal, Val};

pub const LEDGERS_PER_DAY: u32 = 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 7 * LEDGERS_PER_DAY;
pub const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - LEDGERS_PER_DAY;

pub const RECORD_BUMP_LEDGERS: u32 = 30 * LEDGERS_PER_DAY;
pub const RECORD_THRESHOLD_LEDGERS: u32 = RECORD_BUMP_LEDGERS - LEDGERS_PER_DAY;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

/// Extend the TTL of a persistent record. The key must exist.
pub fn bump_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_THRESHOLD_LEDGERS, RECORD_BUMP_LEDGERS);
}
