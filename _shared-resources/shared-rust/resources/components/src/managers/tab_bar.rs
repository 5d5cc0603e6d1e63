// Tab Bar Configuration
// YAML structures and the conversion that builds a TabBarView from them

use std::collections::HashSet;
use std::rc::Rc;

use ratatui::style::Color;
use serde::Deserialize;

use crate::core::{Tab, Tag, TextContent};
use crate::elements::tab_bar::{SafeAreaInsets, TabBarColors, TabBarView};
use crate::error::TabBarError;
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Safe-area insets from YAML, every side optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SafeAreaYaml {
    #[serde(default)]
    pub top: u16,
    #[serde(default)]
    pub bottom: u16,
    #[serde(default)]
    pub left: u16,
    #[serde(default)]
    pub right: u16,
}

/// Tab bar colors from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarColorsYaml {
    /// Item icon and caption color (defaults to "gray")
    pub item: Option<String>,
    /// Divider hairline color (defaults to "dark_gray")
    pub divider: Option<String>,
    /// Row background (defaults to "#1c1c1e")
    pub background: Option<String>,
}

/// Tab bar configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarConfigYaml {
    /// Handle name (HWND) the tab row is measured under
    pub hwnd: String,
    /// Tag selected at startup (defaults to the first tab's tag)
    pub initial_selection: Option<Tag>,
    pub safe_area: Option<SafeAreaYaml>,
    pub colors: Option<TabBarColorsYaml>,
    /// Blank rows above and below each item (defaults to 1)
    pub vertical_padding: Option<u16>,
    /// Minimum icon width in columns (defaults to 3)
    pub icon_min_width: Option<u16>,
    /// List of tabs
    pub tabs: Vec<TabConfigYaml>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Icon identifier, e.g. "star.fill"
    pub icon: String,
    /// Optional caption under the icon
    pub label: Option<String>,
    /// Tab tag (defaults to the tab's position)
    pub tag: Option<Tag>,
    /// Text shown in the content region while the tab is active
    #[serde(default)]
    pub content: String,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

impl From<&SafeAreaYaml> for SafeAreaInsets {
    fn from(yaml: &SafeAreaYaml) -> Self {
        Self {
            top: yaml.top,
            bottom: yaml.bottom,
            left: yaml.left,
            right: yaml.right,
        }
    }
}

fn color_or(value: Option<&str>, fallback: Color, hwnd: &str) -> Color {
    match value {
        None => fallback,
        Some(name) => parse_color(name).unwrap_or_else(|| {
            tracing::warn!(hwnd, color = name, "unknown tab bar color, using default");
            fallback
        }),
    }
}

/// Convert YAML colors, falling back to defaults for anything missing or unparsable
pub fn convert_colors(config: &TabBarConfigYaml) -> TabBarColors {
    let defaults = TabBarColors::default();
    let Some(colors) = config.colors.as_ref() else {
        return defaults;
    };
    TabBarColors {
        item_fg: color_or(colors.item.as_deref(), defaults.item_fg, &config.hwnd),
        divider: color_or(colors.divider.as_deref(), defaults.divider, &config.hwnd),
        background: color_or(colors.background.as_deref(), defaults.background, &config.hwnd),
    }
}

/// Tags in display order, filling missing ones with the tab's position
pub fn resolve_tags(config: &TabBarConfigYaml) -> Vec<Tag> {
    config
        .tabs
        .iter()
        .enumerate()
        .map(|(idx, tab)| tab.tag.unwrap_or(idx as Tag))
        .collect()
}

/// Reject configurations where two tabs share a tag
pub fn check_unique_tags(config: &TabBarConfigYaml) -> Result<(), TabBarError> {
    let mut seen = HashSet::new();
    for tag in resolve_tags(config) {
        if !seen.insert(tag) {
            return Err(TabBarError::DuplicateTag {
                hwnd: config.hwnd.clone(),
                tag,
            });
        }
    }
    Ok(())
}

/// Convert YAML tab configurations to tab descriptors with text content
pub fn create_tabs(config: &TabBarConfigYaml) -> Vec<Tab> {
    config
        .tabs
        .iter()
        .zip(resolve_tags(config))
        .map(|(tab, tag)| {
            Tab::from_shared(
                tab.icon.clone(),
                tab.label.clone(),
                tag,
                Rc::new(TextContent::new(tab.content.clone())),
            )
        })
        .collect()
}

/// Create a tab bar from YAML configuration
pub fn create_tab_bar_from_config(config: &TabBarConfigYaml) -> Result<TabBarView, TabBarError> {
    check_unique_tags(config)?;

    let mut view = TabBarView::new(create_tabs(config))
        .with_handle_name(config.hwnd.clone())
        .with_colors(convert_colors(config));
    if let Some(tag) = config.initial_selection {
        view = view.with_selection(tag);
    }
    if let Some(safe_area) = config.safe_area.as_ref() {
        view = view.with_safe_area(safe_area.into());
    }
    if let Some(padding) = config.vertical_padding {
        view = view.with_vertical_padding(padding);
    }
    if let Some(width) = config.icon_min_width {
        view = view.with_icon_min_width(width);
    }

    tracing::debug!(
        hwnd = %config.hwnd,
        tabs = view.tabs().len(),
        selection = view.selection(),
        "tab bar created from config"
    );
    Ok(view)
}
