//! In-memory TaskStore implementation.

use crate::domain::{Patch, TallyError, Task, TaskId};
use crate::ports::{IdGenerator, SystemClock, TaskStore, UlidGenerator};

/// Vec-backed store.
///
/// Design:
/// - The Vec is the single source of truth; insertion order is the Vec
///   order and every id lookup is a linear scan. At interactive-menu scale
///   that is the right trade (no index to keep in sync).
/// - The id generator is injected, not reached for globally. `new()` wires
///   the production ULID generator; tests inject their own.
pub struct InMemoryStore<G = UlidGenerator<SystemClock>> {
    tasks: Vec<Task>,
    id_gen: G,
}

impl InMemoryStore {
    /// Store wired with the production ULID generator.
    pub fn new() -> Self {
        Self::with_id_generator(UlidGenerator::new(SystemClock))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryStore<G> {
    /// Store with an injected id generator.
    pub fn with_id_generator(id_gen: G) -> Self {
        Self {
            tasks: Vec::new(),
            id_gen,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<G: IdGenerator> TaskStore for InMemoryStore<G> {
    fn add(&mut self, title: &str, description: Option<String>) -> Result<Task, TallyError> {
        let task = Task::new(self.id_gen.task_id(), title, description)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn update(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Patch<String>,
    ) -> Result<Option<Task>, TallyError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return Ok(None);
        };

        // Title first: a validation failure must leave the task fully
        // untouched, including a pending description patch.
        if let Some(title) = title {
            task.rename(title)?;
        }
        task.apply_description(description);

        Ok(Some(task.clone()))
    }

    fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    fn mark_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.mark_complete();
                true
            }
            None => false,
        }
    }

    fn mark_incomplete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.mark_incomplete();
                true
            }
            None => false,
        }
    }
}
