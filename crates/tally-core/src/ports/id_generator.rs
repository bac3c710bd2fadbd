//! IdGenerator port - id generation behind a seam.
//!
//! The store never mints ids itself; it asks this port. That keeps id
//! strategy swappable and makes deterministic tests possible.

use ulid::Ulid;

use crate::domain::ids::TaskId;
use crate::ports::Clock;

/// Generates fresh task ids.
///
/// # Thread safety
/// `Send + Sync` so a store can be handed across threads, even though the
/// core itself runs single-threaded.
pub trait IdGenerator: Send + Sync {
    fn task_id(&self) -> TaskId;
}

/// ULID-based generator: timestamp from the clock, random payload.
///
/// With `FixedClock` the timestamp half is deterministic, which tests use
/// to pin generated ids to a known instant.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        TaskId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
