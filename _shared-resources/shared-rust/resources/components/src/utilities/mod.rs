// Utilities module
// Helper functions shared by the tab bar elements

pub mod helpers;

pub use helpers::*;
