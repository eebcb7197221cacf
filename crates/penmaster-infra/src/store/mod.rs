//! Persistence adapters.

mod memory;

pub use memory::{InMemoryPostStore, InMemoryUserStore};
