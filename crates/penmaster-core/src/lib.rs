//! # Pen Master Core
//!
//! The domain layer of the Pen Master scheduler.
//! This crate contains pure business logic with zero infrastructure
//! dependencies: domain entities, port traits, and the schedule generator.

pub mod domain;
pub mod error;
pub mod ports;
pub mod schedule;

pub use error::DomainError;
