//! Persistence implementations
//!
//! This module provides implementations of the `TableRepository` trait.

mod file_table_repo;
mod memory_table_repo;

pub use file_table_repo::FileTableRepository;
pub use memory_table_repo::InMemoryTableRepository;
