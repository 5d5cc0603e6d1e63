// Tab bar components library
// A bottom tab bar that swaps the content shown above it based on the active tab

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// YAML configuration helpers
pub mod managers;
// Utilities and helpers
pub mod utilities;

pub mod error;

// Re-export commonly used items
// Note: tab_bar exists in both elements and managers (TabBarView vs its YAML helpers),
// callers reach for the items rather than the module names
#[allow(ambiguous_glob_reexports)]
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
pub use error::TabBarError;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
