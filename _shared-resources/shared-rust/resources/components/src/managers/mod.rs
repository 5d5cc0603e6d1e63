// Managers module
// YAML configuration helpers for building tab bars

pub mod tab_bar;

pub use tab_bar::{
    check_unique_tags,
    convert_colors,
    create_tab_bar_from_config,
    create_tabs,
    resolve_tags,
    SafeAreaYaml,
    TabBarColorsYaml,
    TabBarConfigYaml,
    TabConfigYaml,
};
