//! Shared models for `kringle`.
//!
//! Everything here is plain data: the [`participant::Participant`] identity,
//! the prior/new assignment maps and the error types that the engine and the
//! roster layer hand back to the binary.

pub mod assignment;
pub mod config;
pub mod error;
pub mod participant;
