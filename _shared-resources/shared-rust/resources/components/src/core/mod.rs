// Core infrastructure module
// Tab descriptors, selection state and the registries the tab bar reads from

pub mod item_registry;
pub mod rect_handle;
pub mod selection;
pub mod tab;

pub use item_registry::{ItemId, ItemRegistry};
pub use rect_handle::{RectHandle, RectMetrics, RectRegistry};
pub use selection::Selection;
pub use tab::{content_fn, FnContent, Tab, TabContent, TabContentRef, Tag, TextContent};
