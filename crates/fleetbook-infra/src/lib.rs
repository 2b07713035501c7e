//! Infrastructure layer
//!
//! Concrete implementations of the domain traits: JSON file storage and
//! the Discord webhook notifier.

pub mod notify;
pub mod persistence;
