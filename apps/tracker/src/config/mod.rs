pub mod runtime;

pub use runtime::{LogFormat, TrackerConfig};
