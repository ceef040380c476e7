// api/mod.rs
//
// Host-facing surface: ids, flat event records, and the listener seam.

pub mod listener;
pub mod types;

pub use listener::{EventListener, EventRecorder};
pub use types::{EntityId, EventRecord};
