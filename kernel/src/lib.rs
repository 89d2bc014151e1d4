//! Wayfinder Kernel: the immutable grid model and canonical hashing.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- rectangular cell classification with located endpoints
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! One-way only. `grid` uses `proof` for its identity fingerprint; `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
