//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth types)
//! - `poll` - Questions, choices, votes and the voting rules

pub mod foundation;
pub mod poll;
