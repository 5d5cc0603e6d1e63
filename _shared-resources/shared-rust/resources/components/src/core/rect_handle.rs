// Rectangle Handle System (HWND-like)
// Records the rectangles measured during layout so later steps of the same pass can read them
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register("tab_bar", rect);
//   // Later in the same pass...
//   if let Some(metrics) = registry.get_metrics(handle) {
//       let content_height = area.height - metrics.height;
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// Metrics for a registered rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectMetrics {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Width of the rectangle
    pub width: u16,
    /// Height of the rectangle
    pub height: u16,
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Registry for tracking measured rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to the latest measurement
    handles: HashMap<u64, RectMetrics>,
    /// Map of name to handle ID
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is never handed out
        }
    }

    /// Register a rectangle under `name` and return its handle
    /// Registering an existing name overwrites its metrics and returns the same handle
    pub fn register(&mut self, name: &str, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);

        if let Some(&handle_id) = self.name_to_handle.get(name) {
            self.handles.insert(handle_id, metrics);
            return RectHandle(handle_id);
        }

        let handle_id = self.next_id;
        self.next_id += 1;
        self.handles.insert(handle_id, metrics);
        self.name_to_handle.insert(name.to_string(), handle_id);
        RectHandle(handle_id)
    }

    /// Get current metrics for a handle
    pub fn get_metrics(&self, handle: RectHandle) -> Option<RectMetrics> {
        self.handles.get(&handle.0).copied()
    }

    /// Measured rectangle for `handle`, or an empty rectangle if nothing is recorded
    pub fn rect_or_zero(&self, handle: Option<RectHandle>) -> Rect {
        handle
            .and_then(|handle| self.get_metrics(handle))
            .map(Rect::from)
            .unwrap_or_default()
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
