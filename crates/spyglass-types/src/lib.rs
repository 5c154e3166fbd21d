//! Foundation types for SPYGLASS.
//!
//! This crate contains the types shared by all SPYGLASS crates: the
//! [`location::Location`] address type and the [`error::SpyglassError`]
//! error enum.

pub mod error;
pub mod location;
