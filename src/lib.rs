// Tab Bar View Library
// Host application for the bottom tab bar: configuration, logging, state and the event loop

// Core infrastructure - application state and events
pub mod core;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Logging setup
pub mod logging;

// UI - rendering and the event loop
pub mod ui;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{App, AppEvent, EventHandler};
pub use config::{load_config, AppConfig};
pub use config_validation::{validate_config, ConfigError};
pub use constants::*;
