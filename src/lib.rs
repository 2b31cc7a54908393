pub mod config;
pub mod errors;
pub mod format;
pub mod graph;
pub mod loader;
pub mod queue;
pub mod types;
