//! The Task entity: immutable identity, mutable content.

use serde::{Deserialize, Serialize};

use super::errors::TallyError;
use super::ids::TaskId;
use super::patch::Patch;

/// A single to-do record.
///
/// Design:
/// - Fields are private; construction goes through `new` and mutation
///   through methods, so the title invariant (never empty or
///   whitespace-only) holds for the whole lifecycle.
/// - Identity (`id`) never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    completed: bool,
}

impl Task {
    /// Create a task. The title is trimmed; an empty or whitespace-only
    /// title is rejected. `completed` starts false.
    pub fn new(
        id: TaskId,
        title: &str,
        description: Option<String>,
    ) -> Result<Self, TallyError> {
        Ok(Self {
            id,
            title: validated_title(title)?,
            description,
            completed: false,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Replace the title (trimmed). Fails without touching the task if the
    /// new title trims to empty.
    pub fn rename(&mut self, title: &str) -> Result<(), TallyError> {
        self.title = validated_title(title)?;
        Ok(())
    }

    /// Apply a description patch: `Keep` leaves the field, `Clear` unsets
    /// it, `Set` replaces it verbatim (an empty string stays an empty
    /// string, distinct from unset).
    pub fn apply_description(&mut self, patch: Patch<String>) {
        patch.apply(&mut self.description);
    }

    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
    }
}

fn validated_title(title: &str) -> Result<String, TallyError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TallyError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
