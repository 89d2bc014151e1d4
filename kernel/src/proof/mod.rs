//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing internal. `grid` and every downstream crate route
//! their digests through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
