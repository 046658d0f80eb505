//! Repository traits the services depend on.

pub mod snapshots;

pub use snapshots::{PersistenceError, SnapshotStore};
