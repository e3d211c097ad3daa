//! Polls - poll questions with publish windows and one vote per user.
//!
//! Users browse published questions, vote for one choice per question
//! (changing it later replaces the earlier vote) and view the tallies.
//! Staff manage questions through the admin endpoints.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
