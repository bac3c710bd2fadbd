//! tally-core
//!
//! Core building blocks for the Tally task tracker.
//!
//! - **domain**: the Task entity, strongly-typed ids, field patches, errors
//! - **ports**: abstraction seams (TaskStore, IdGenerator, Clock)
//! - **store**: the in-memory TaskStore implementation
//!
//! The CLI in `tally-cli` is the only consumer today; anything else (a
//! persistence backend, another front end) programs against the same
//! `ports::TaskStore` contract.

pub mod domain;
pub mod ports;
pub mod store;

pub use domain::{Patch, TallyError, Task, TaskId};
pub use ports::TaskStore;
pub use store::InMemoryStore;
