//! Domain model (ids, the Task entity, field patches, errors).

pub mod errors;
pub mod ids;
pub mod patch;
pub mod task;

pub use errors::TallyError;
pub use ids::TaskId;
pub use patch::Patch;
pub use task::Task;
