// Application constants

use std::time::Duration;

/// Handle name (HWND) of the tab bar the application shows
pub const HWND_MAIN_TAB_BAR: &str = "main_tab_bar";

/// Log file used when neither the command line nor the config names one
pub const DEFAULT_LOG_FILE: &str = "tab-bar-view.log";

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// How long to wait for terminal input before redrawing
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Drawn in the bottom safe-area row
pub const SHORTCUT_HINT: &str = "1-9 switch tab · click to select · q quit";
