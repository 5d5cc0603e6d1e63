// Application State
// Owns the main tab bar and the quit flag

use anyhow::{anyhow, Result};
use tui_tab_bar::{create_tab_bar_from_config, TabBarView, Tag};

use crate::config::AppConfig;
use crate::constants::HWND_MAIN_TAB_BAR;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Title shown above the content
    pub title: String,

    /// The tab bar filling the rest of the screen
    pub tab_bar: TabBarView,

    /// Whether mouse capture is on
    pub mouse_enabled: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application from validated configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let tab_bar_config = config.tab_bar_by_hwnd(HWND_MAIN_TAB_BAR).ok_or_else(|| {
            anyhow!(
                "tab bar with hwnd '{}' not found in config. Available tab bars: {}",
                HWND_MAIN_TAB_BAR,
                config.tab_bar_names().join(", ")
            )
        })?;
        let tab_bar = create_tab_bar_from_config(tab_bar_config)?;

        Ok(Self {
            title: config.application.title.clone(),
            tab_bar,
            mouse_enabled: config.application.mouse,
            should_quit: false,
        })
    }

    /// Activate the tab at a 0-based position
    pub fn activate_tab(&mut self, index: usize) -> Option<Tag> {
        let tag = self.tab_bar.activate_index(index);
        if tag.is_none() {
            tracing::debug!(index, "no tab at shortcut position");
        }
        tag
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    const STAR_CLOCK: &str = r#"
application:
  title: Phone
  mouse: false
tab_bars:
  main:
    hwnd: main_tab_bar
    tabs:
      - icon: star
        tag: 0
        content: A
      - icon: clock
        tag: 1
        content: B
"#;

    #[test]
    fn test_from_config() {
        let app = App::from_config(&parse_config(STAR_CLOCK).unwrap()).unwrap();
        assert_eq!(app.title, "Phone");
        assert!(!app.mouse_enabled);
        assert!(!app.should_quit);
        assert_eq!(app.tab_bar.tabs().len(), 2);
        assert_eq!(app.tab_bar.selection(), 0);
    }

    #[test]
    fn test_activate_tab_by_position() {
        let mut app = App::from_config(&parse_config(STAR_CLOCK).unwrap()).unwrap();
        assert_eq!(app.activate_tab(1), Some(1));
        assert_eq!(app.tab_bar.selection(), 1);
        assert_eq!(app.activate_tab(5), None);
        assert_eq!(app.tab_bar.selection(), 1);
    }

    #[test]
    fn test_missing_main_tab_bar() {
        let config = parse_config(
            "application:\n  title: T\ntab_bars:\n  side:\n    hwnd: side\n    tabs: []\n",
        )
        .unwrap();
        let err = App::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("main_tab_bar"));
    }
}
