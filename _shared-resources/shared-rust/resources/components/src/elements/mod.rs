// GUI Elements module
// Visual components that render the tab bar

pub mod icons;
pub mod tab_bar;
pub mod tab_item;

pub use icons::glyph_for;
pub use tab_bar::*;
pub use tab_item::*;
