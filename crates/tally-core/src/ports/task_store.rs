//! TaskStore port - the service contract over a task collection.
//!
//! `store::InMemoryStore` is the only implementation shipped. A persistence
//! backend would slot in behind this same trait with identical contracts,
//! without touching the CLI.

use crate::domain::{Patch, TallyError, Task, TaskId};

/// Owning collection and sole mutator of Task records.
///
/// Contracts shared by every implementation:
/// - insertion order is preserved and observable through `list`;
/// - at most one task per id;
/// - "no such id" is an absent/false return, never an error.
pub trait TaskStore {
    /// Create a task and append it to the collection. Errors if the title
    /// trims to empty; the collection is unchanged in that case.
    fn add(&mut self, title: &str, description: Option<String>) -> Result<Task, TallyError>;

    /// Snapshot of all tasks in insertion order. Mutating the returned
    /// vector does not touch store state.
    fn list(&self) -> Vec<Task>;

    /// The first (and, by invariant, only) task with this id.
    fn find_by_id(&self, id: TaskId) -> Option<&Task>;

    /// Apply a title and/or description update to the matching task.
    ///
    /// - `Ok(None)`: no task with this id; nothing changed.
    /// - `Err(EmptyTitle)`: a title was provided but trims to empty; the
    ///   task keeps its previous title and description.
    /// - `Ok(Some(task))`: the mutated task.
    fn update(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Patch<String>,
    ) -> Result<Option<Task>, TallyError>;

    /// Remove the matching task. True iff something was removed.
    fn delete(&mut self, id: TaskId) -> bool;

    /// Set `completed = true` on the matching task. False if no match.
    fn mark_complete(&mut self, id: TaskId) -> bool;

    /// Set `completed = false` on the matching task. False if no match.
    fn mark_incomplete(&mut self, id: TaskId) -> bool;
}
