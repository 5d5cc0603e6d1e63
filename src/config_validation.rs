// Configuration validation module

use thiserror::Error;
use tui_tab_bar::{check_unique_tags, resolve_tags, TabBarError};

use crate::config::AppConfig;
use crate::constants::HWND_MAIN_TAB_BAR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tab bar with hwnd '{hwnd}' not found in config. Available tab bars: {available}")]
    MissingTabBar { hwnd: String, available: String },

    #[error(transparent)]
    TabBar(#[from] TabBarError),
}

/// Check that the main tab bar exists and that no tab bar repeats a tag
/// Empty tab bars and unmatched initial selections only warn, so install logging first
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tab_bar_by_hwnd(HWND_MAIN_TAB_BAR).is_none() {
        return Err(ConfigError::MissingTabBar {
            hwnd: HWND_MAIN_TAB_BAR.to_string(),
            available: config.tab_bar_names().join(", "),
        });
    }

    for name in config.tab_bar_names() {
        let tab_bar = &config.tab_bars[name];
        check_unique_tags(tab_bar)?;

        if tab_bar.tabs.is_empty() {
            tracing::warn!(tab_bar = name, "tab bar has no tabs, only the empty view will show");
        }
        if let Some(initial) = tab_bar.initial_selection {
            if !resolve_tags(tab_bar).contains(&initial) {
                tracing::warn!(
                    tab_bar = name,
                    initial,
                    "initial selection matches no tab, the empty view will show"
                );
            }
        }
    }

    Ok(())
}
