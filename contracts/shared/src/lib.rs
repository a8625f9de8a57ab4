#![no_std]
//! # Shared ledger plumbing
//!
//! Helpers used by both the governance and the property contracts.
//!
//! - `ids` - sequential id allocation backed by instance storage
//! - `ttl` - ledger TTL constants and bump helpers
//!
//! The two contracts never share state; each one owns its own counters and
//! records, and only the code that manipulates them lives here.

pub mod ids;
pub mod ttl;

pub use ids::{last_id, next_id};
pub use ttl::{bump_instance, bump_record};
