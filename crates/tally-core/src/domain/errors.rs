//! Domain errors.

use thiserror::Error;

/// Domain error for Tally.
///
/// "No such task" is deliberately NOT a variant: lookups and id-keyed
/// mutations report absence through `Option` / `bool`, which keeps a missing
/// id an expected outcome rather than an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TallyError {
    /// A title was empty or whitespace-only after trimming.
    #[error("task title cannot be empty")]
    EmptyTitle,
}
