//! Store implementations for the TaskStore port.

mod memory;

pub use memory::InMemoryStore;
