//! Tri-state field update.

use serde::{Deserialize, Serialize};

/// An update instruction for an optional field.
///
/// Distinguishes "caller said nothing" (`Keep`) from "caller cleared the
/// field" (`Clear`) and "caller provided a value" (`Set`). Collapsing these
/// into a single `Option` would silently turn an intentional clear into a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Patch<T> {
    /// Leave the field as it is.
    Keep,
    /// Unset the field.
    Clear,
    /// Replace the field with this value, verbatim.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Fold this patch onto a field slot.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(value) => *slot = Some(value),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}
