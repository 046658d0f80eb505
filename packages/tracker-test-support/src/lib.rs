//! Tracker test support utilities
//!
//! Shared helpers for the tracker integration tests: unified logging
//! initialization and throwaway snapshot locations.

pub mod logging;
pub mod save_files;
