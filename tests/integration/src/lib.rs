//! End-to-end test utilities for the roll-call server
//!
//! Spawns the real application against the PostgreSQL database named by
//! `DATABASE_URL` and talks to it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
