//! Storage adapters implementing the repository traits.

pub mod snapshot_file;
pub mod snapshot_memory;

pub use snapshot_file::JsonFileStore;
pub use snapshot_memory::MemoryStore;
