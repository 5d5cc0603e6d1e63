// Tab Item
// One pressable icon + caption cell in the tab row

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};

use super::icons::glyph_for;
use crate::core::{Selection, Tab, Tag};

/// Sizing rules shared by every item in a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMetrics {
    /// Minimum number of columns the icon occupies
    pub icon_min_width: u16,
    /// Blank rows above and below the icon/caption stack
    pub vertical_padding: u16,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self {
            icon_min_width: 3,
            vertical_padding: 1,
        }
    }
}

/// Render widget for one tab, borrowed from its `Tab`
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    icon: &'a str,
    label: Option<&'a str>,
    tag: Tag,
    metrics: ItemMetrics,
    style: Style,
}

impl<'a> TabItem<'a> {
    pub fn new(icon: &'a str, label: Option<&'a str>, tag: Tag) -> Self {
        Self {
            icon,
            label,
            tag,
            metrics: ItemMetrics::default(),
            style: Style::default(),
        }
    }

    pub fn from_tab(tab: &'a Tab) -> Self {
        Self::new(tab.icon(), tab.label(), tab.tag())
    }

    pub fn with_metrics(mut self, metrics: ItemMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Rows needed to draw this item: padding, icon, optional caption, padding
    pub fn height(&self) -> u16 {
        let caption = u16::from(self.label.is_some());
        self.metrics.vertical_padding * 2 + 1 + caption
    }

    /// Press handler: makes this item's tag the active one
    pub fn activate(&self, selection: &mut Selection) -> bool {
        selection.select(self.tag)
    }

    /// Whether this item's tag is the active one
    /// Styling does not depend on it
    pub fn is_active(&self, selection: &Selection) -> bool {
        selection.is(self.tag)
    }

    /// Whether a pointer at (column, row) lands in the item's pressable area
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Widget for TabItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style);

        let icon_y = area.y + self.metrics.vertical_padding;
        if icon_y >= area.bottom() {
            return;
        }
        let icon = format!(
            "{:^width$}",
            glyph_for(self.icon),
            width = self.metrics.icon_min_width as usize
        );
        Line::styled(icon, self.style)
            .centered()
            .render(Rect { y: icon_y, height: 1, ..area }, buf);

        if let Some(label) = self.label {
            let label_y = icon_y + 1;
            if label_y < area.bottom() {
                Line::styled(label, self.style)
                    .centered()
                    .render(Rect { y: label_y, height: 1, ..area }, buf);
            }
        }
    }
}
