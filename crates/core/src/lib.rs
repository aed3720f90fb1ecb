//! Shared domain types for the Archon backend.
//!
//! - [`error`] -- the domain error taxonomy ([`error::CoreError`]).
//! - [`roles`] -- well-known role names and validation.
//! - [`types`] -- database id and timestamp aliases.

pub mod error;
pub mod roles;
pub mod types;
