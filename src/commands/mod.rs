//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and writes its result to the given output.

pub mod facets;
pub mod search;
pub mod shell;
pub mod show;

// Re-export execute functions for convenience
pub use facets::execute as facets;
pub use search::execute as search;
pub use shell::run as shell;
pub use show::execute as show;
