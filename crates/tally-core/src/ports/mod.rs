//! Ports - abstraction seams.
//!
//! Each trait hides an implementation detail behind an interface: what owns
//! the task collection (TaskStore), where ids come from (IdGenerator), and
//! what time it is (Clock).

pub mod clock;
pub mod id_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::task_store::TaskStore;
