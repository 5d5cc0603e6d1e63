// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tui_tab_bar::TabBarConfigYaml;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(rename = "tab_bars")]
    pub tab_bars: HashMap<String, TabBarConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    /// Enable mouse capture so tab items can be clicked
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_mouse() -> bool {
    true
}

impl AppConfig {
    /// Look up a tab bar config by handle name (HWND)
    pub fn tab_bar_by_hwnd(&self, hwnd: &str) -> Option<&TabBarConfigYaml> {
        self.tab_bars.values().find(|config| config.hwnd == hwnd)
    }

    /// Config keys of all tab bars, sorted
    pub fn tab_bar_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tab_bars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The config.yaml that ships next to the sources
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    serde_yaml::from_str(contents).context("invalid configuration")
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
