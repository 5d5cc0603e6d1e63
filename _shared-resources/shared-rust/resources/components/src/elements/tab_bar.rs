// Tab Bar Component
// A row of tab items pinned to the bottom of its area, with the active tab's content above it

use std::rc::Rc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::Widget,
    Frame,
};

use super::tab_item::{ItemMetrics, TabItem};
use crate::core::{ItemId, ItemRegistry, RectHandle, RectRegistry, Selection, Tab, TabContentRef, Tag};
use crate::utilities::{hex_color, render_centered};

/// Shown in the content region when no tab matches the selection
pub const PLACEHOLDER_TEXT: &str = "Empty View";

/// Handle name the tab row is measured under
pub const DEFAULT_HANDLE_NAME: &str = "tab_bar";

/// Rows/columns reserved by host chrome around the bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeAreaInsets {
    pub top: u16,
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
}

impl SafeAreaInsets {
    pub fn bottom(bottom: u16) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarColors {
    /// Item icon and caption color
    pub item_fg: Color,
    /// Hairline above the row
    pub divider: Color,
    /// Row background
    pub background: Color,
}

impl Default for TabBarColors {
    fn default() -> Self {
        Self {
            item_fg: Color::Gray,
            divider: Color::DarkGray,
            background: hex_color(0x1C1C1E),
        }
    }
}

/// Result of one layout pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBarLayout {
    /// Full area handed to the bar
    pub area: Rect,
    /// Measured tab row, including divider and bottom inset
    pub tab_row: Rect,
    /// Hairline on the top line of the row
    pub divider: Rect,
    /// Pressable rectangle of each item, in tab order
    pub items: Vec<(Tag, Rect)>,
    /// Region above the row where the active content is drawn
    pub content: Rect,
}

/// What the content region shows for the current selection
#[derive(Clone)]
pub enum Displayed<'a> {
    Content(&'a TabContentRef),
    Placeholder,
}

impl Displayed<'_> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Displayed::Placeholder)
    }
}

/// Content region for a container `area` whose tab row measured `tab_row`
/// Full width, everything above the row
pub fn content_region(area: Rect, tab_row: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(tab_row.height),
    }
}

/// Split `width` into `count` columns, spreading the remainder from the left
fn split_columns(x: u16, width: u16, count: usize) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let base = width / count_u16;
    let remainder = width % count_u16;

    let mut columns = Vec::with_capacity(count);
    let mut current_x = x;
    for idx in 0..count {
        let extra = u16::from((idx as u16) < remainder);
        let column_width = base + extra;
        columns.push((current_x, column_width));
        current_x = current_x.saturating_add(column_width);
    }
    columns
}

pub struct TabBarView {
    /// Configured tabs, in display order
    tabs: Vec<Tab>,
    /// Registry handle for each tab, parallel to `tabs`
    mounted: Vec<ItemId>,
    items: ItemRegistry,
    selection: Selection,
    /// Measured bounds, keyed by `handle_name`
    bounds: RectRegistry,
    /// Handle of the tab row in `bounds`, set by the first layout pass
    row_handle: Option<RectHandle>,
    handle_name: String,
    safe_area: SafeAreaInsets,
    colors: TabBarColors,
    metrics: ItemMetrics,
    last_layout: Option<TabBarLayout>,
}

impl TabBarView {
    /// Build a bar from its tabs; the first tab starts selected
    pub fn new(tabs: Vec<Tab>) -> Self {
        let initial = tabs.first().map(Tab::tag).unwrap_or_default();
        let mut view = Self {
            tabs: Vec::with_capacity(tabs.len()),
            mounted: Vec::with_capacity(tabs.len()),
            items: ItemRegistry::new(),
            selection: Selection::new(initial),
            bounds: RectRegistry::new(),
            row_handle: None,
            handle_name: DEFAULT_HANDLE_NAME.to_string(),
            safe_area: SafeAreaInsets::default(),
            colors: TabBarColors::default(),
            metrics: ItemMetrics::default(),
            last_layout: None,
        };
        for tab in tabs {
            view.push_tab(tab);
        }
        view
    }

    pub fn with_selection(mut self, tag: Tag) -> Self {
        self.selection = Selection::new(tag);
        self
    }

    pub fn with_safe_area(mut self, safe_area: SafeAreaInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_colors(mut self, colors: TabBarColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_vertical_padding(mut self, padding: u16) -> Self {
        self.metrics.vertical_padding = padding;
        self
    }

    pub fn with_icon_min_width(mut self, width: u16) -> Self {
        self.metrics.icon_min_width = width;
        self
    }

    pub fn with_handle_name(mut self, name: impl Into<String>) -> Self {
        self.handle_name = name.into();
        self.row_handle = None;
        self
    }

    /// Mount a new tab at the end of the row
    pub fn push_tab(&mut self, tab: Tab) {
        let id = self.items.mount(tab.tag(), Rc::clone(tab.content()));
        self.tabs.push(tab);
        self.mounted.push(id);
    }

    /// Unmount the first tab carrying `tag`
    /// The selection is left alone; if it pointed at this tab the placeholder shows
    pub fn remove_tab(&mut self, tag: Tag) -> Option<Tab> {
        let index = self.tabs.iter().position(|tab| tab.tag() == tag)?;
        let id = self.mounted.remove(index);
        self.items.unmount(id);
        Some(self.tabs.remove(index))
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// The active tag
    pub fn selection(&self) -> Tag {
        self.selection.tag()
    }

    pub fn selection_state(&self) -> &Selection {
        &self.selection
    }

    pub fn handle_name(&self) -> &str {
        &self.handle_name
    }

    pub fn safe_area(&self) -> SafeAreaInsets {
        self.safe_area
    }

    /// Content for the active tag, first registered match wins
    pub fn displayed(&self) -> Displayed<'_> {
        match self.items.resolve(self.selection.tag()) {
            Some(content) => Displayed::Content(content),
            None => Displayed::Placeholder,
        }
    }

    fn item_widgets(&self) -> impl Iterator<Item = TabItem<'_>> {
        let style = Style::default().fg(self.colors.item_fg);
        let metrics = self.metrics;
        self.tabs
            .iter()
            .map(move |tab| TabItem::from_tab(tab).with_metrics(metrics).with_style(style))
    }

    /// Rows the tab row wants: divider, tallest item, bottom inset
    pub fn row_height(&self) -> u16 {
        let items = self.item_widgets().map(|item| item.height()).max().unwrap_or(0);
        1 + items + self.safe_area.bottom
    }

    /// Measured tab row from the last layout pass, empty before the first one
    pub fn tab_row_bounds(&self) -> Rect {
        self.bounds.rect_or_zero(self.row_handle)
    }

    /// Content region from the last layout pass
    pub fn content_area(&self) -> Option<Rect> {
        self.last_layout.as_ref().map(|layout| layout.content)
    }

    pub fn last_layout(&self) -> Option<&TabBarLayout> {
        self.last_layout.as_ref()
    }

    /// Lay out the row at the bottom of `area`, measure it, then size the content region from it
    pub fn layout(&mut self, area: Rect) -> TabBarLayout {
        let row_height = self.row_height().min(area.height);
        let tab_row = Rect {
            x: area.x,
            y: area.bottom() - row_height,
            width: area.width,
            height: row_height,
        };
        self.row_handle = Some(self.bounds.register(&self.handle_name, tab_row));

        let measured = self.tab_row_bounds();
        let content = content_region(area, measured);

        let divider = Rect {
            height: measured.height.min(1),
            ..measured
        };
        let below_divider = measured.height - divider.height;
        let inset = self.safe_area.bottom.min(below_divider);
        let items_row = Rect {
            x: measured.x,
            y: measured.y + divider.height,
            width: measured.width,
            height: below_divider - inset,
        };

        let items = self
            .tabs
            .iter()
            .zip(split_columns(items_row.x, items_row.width, self.tabs.len()))
            .map(|(tab, (x, width))| (tab.tag(), Rect { x, width, ..items_row }))
            .collect();

        let layout = TabBarLayout {
            area,
            tab_row: measured,
            divider,
            items,
            content,
        };
        tracing::trace!(?area, tab_row = ?layout.tab_row, content = ?layout.content, "tab bar layout");
        self.last_layout = Some(layout.clone());
        layout
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.render_to_buffer(area, f.buffer_mut());
    }

    pub fn render_to_buffer(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);

        buf.set_style(layout.tab_row, Style::default().bg(self.colors.background));
        if !layout.divider.is_empty() {
            buf.set_string(
                layout.divider.x,
                layout.divider.y,
                "─".repeat(layout.divider.width as usize),
                Style::default().fg(self.colors.divider),
            );
        }
        for (item, (_, item_area)) in self.item_widgets().zip(layout.items.iter()) {
            item.render(*item_area, buf);
        }

        match self.displayed() {
            Displayed::Content(content) => content.render(layout.content, buf),
            Displayed::Placeholder => render_centered(
                Text::raw(PLACEHOLDER_TEXT),
                Style::default(),
                layout.content,
                buf,
            ),
        }
    }

    /// Activate the item under (column, row) from the last layout pass
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<Tag> {
        let tag = self
            .last_layout
            .as_ref()?
            .items
            .iter()
            .find(|(_, area)| TabItem::contains(*area, column, row))
            .map(|(tag, _)| *tag)?;
        self.activate_tag(tag)
    }

    /// Activate on left-button release inside an item
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> Option<Tag> {
        match event.kind {
            MouseEventKind::Up(MouseButton::Left) => self.handle_click(event.column, event.row),
            _ => None,
        }
    }

    /// Activate the item at `index` in display order
    pub fn activate_index(&mut self, index: usize) -> Option<Tag> {
        let tab = self.tabs.get(index)?;
        TabItem::from_tab(tab).activate(&mut self.selection);
        Some(self.selection.tag())
    }

    /// Activate the first item carrying `tag`; unknown tags are ignored
    pub fn activate_tag(&mut self, tag: Tag) -> Option<Tag> {
        let index = self.tabs.iter().position(|tab| tab.tag() == tag)?;
        self.activate_index(index)
    }
}

impl std::fmt::Debug for TabBarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBarView")
            .field("tabs", &self.tabs)
            .field("selection", &self.selection)
            .field("handle_name", &self.handle_name)
            .field("safe_area", &self.safe_area)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right()).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn region_text(buf: &Buffer, region: Rect) -> String {
        (region.y..region.bottom())
            .map(|y| {
                (region.x..region.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn star_clock() -> TabBarView {
        TabBarView::new(vec![Tab::new("star", 0, "A"), Tab::new("clock", 1, "B")])
    }

    fn draw(view: &mut TabBarView, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        view.render_to_buffer(area, &mut buf);
        buf
    }

    #[test]
    fn test_scenario_switches_content() {
        let area = Rect::new(0, 0, 20, 10);
        let mut view = star_clock();
        assert_eq!(view.selection(), 0);

        let buf = draw(&mut view, area);
        let content = region_text(&buf, view.content_area().unwrap());
        assert!(content.contains('A'));
        assert!(!content.contains('B'));

        assert_eq!(view.activate_tag(1), Some(1));
        assert_eq!(view.selection(), 1);
        let buf = draw(&mut view, area);
        let content = region_text(&buf, view.content_area().unwrap());
        assert!(content.contains('B'));
        assert!(!content.contains('A'));

        assert_eq!(view.activate_tag(0), Some(0));
        let buf = draw(&mut view, area);
        let content = region_text(&buf, view.content_area().unwrap());
        assert!(content.contains('A'));
        assert!(!content.contains('B'));
    }

    #[test]
    fn test_one_item_per_tab() {
        let area = Rect::new(0, 0, 30, 12);
        let mut view = TabBarView::new(vec![
            Tab::new("star.fill", 0, "A").with_label("Favorites"),
            Tab::new("clock.fill", 1, "B").with_label("Recents"),
            Tab::new("phone", 2, "C").with_label("Calls"),
        ]);
        let buf = draw(&mut view, area);
        let layout = view.last_layout().unwrap();

        assert_eq!(layout.items.len(), 3);
        let tags: Vec<Tag> = layout.items.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, vec![0, 1, 2]);

        // padding, icon, caption, padding below the divider
        let icon_row = row_text(&buf, layout.tab_row.y + 2);
        let caption_row = row_text(&buf, layout.tab_row.y + 3);
        for glyph in ["★", "◴", "☏"] {
            assert!(icon_row.contains(glyph), "missing {glyph} in {icon_row:?}");
        }
        for caption in ["Favorites", "Recents", "Calls"] {
            assert!(caption_row.contains(caption), "missing {caption} in {caption_row:?}");
        }
    }

    #[test]
    fn test_items_split_full_width() {
        let mut view = TabBarView::new(vec![
            Tab::new("a", 0, "A"),
            Tab::new("b", 1, "B"),
            Tab::new("c", 2, "C"),
        ]);
        let layout = view.layout(Rect::new(0, 0, 20, 10));
        let widths: Vec<u16> = layout.items.iter().map(|(_, r)| r.width).collect();
        assert_eq!(widths, vec![7, 7, 6]);
        assert_eq!(layout.items[1].1.x, 7);
        assert_eq!(layout.items[2].1.x, 14);
    }

    #[test]
    fn test_divider_on_top_line_of_row() {
        let area = Rect::new(0, 0, 12, 8);
        let mut view = star_clock();
        let buf = draw(&mut view, area);
        let layout = view.last_layout().unwrap();

        assert_eq!(layout.divider.y, layout.tab_row.y);
        assert_eq!(row_text(&buf, layout.divider.y), "─".repeat(12));
        assert_eq!(buf[(0, layout.divider.y)].fg, Color::DarkGray);
    }

    #[test]
    fn test_unknown_selection_shows_placeholder() {
        let area = Rect::new(0, 0, 20, 10);
        let mut view = star_clock().with_selection(9);
        assert!(view.displayed().is_placeholder());

        let buf = draw(&mut view, area);
        let content = region_text(&buf, view.content_area().unwrap());
        assert!(content.contains(PLACEHOLDER_TEXT));
        assert!(!content.contains('A'));
        assert!(!content.contains('B'));
    }

    #[test]
    fn test_no_tabs_shows_placeholder() {
        let area = Rect::new(0, 0, 20, 6);
        let mut view = TabBarView::new(Vec::new());
        assert_eq!(view.selection(), 0);

        let buf = draw(&mut view, area);
        let layout = view.last_layout().unwrap();
        assert!(layout.items.is_empty());
        assert_eq!(layout.tab_row.height, 1);
        assert!(region_text(&buf, layout.content).contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_content_height_is_area_minus_measured_row() {
        for padding in 0..3 {
            for inset in 0..3 {
                for height in [0u16, 1, 2, 4, 7, 24] {
                    let mut view = star_clock()
                        .with_vertical_padding(padding)
                        .with_safe_area(SafeAreaInsets::bottom(inset));
                    let area = Rect::new(3, 2, 40, height);
                    let layout = view.layout(area);

                    assert_eq!(view.tab_row_bounds(), layout.tab_row);
                    assert_eq!(layout.content.height, height - layout.tab_row.height);
                    assert_eq!(layout.content.width, area.width);
                    assert_eq!(layout.content.y, area.y);
                    assert_eq!(layout.tab_row.bottom(), area.bottom());
                }
            }
        }
    }

    #[test]
    fn test_row_height_includes_bottom_inset() {
        let mut view = star_clock().with_safe_area(SafeAreaInsets::bottom(2));
        // divider + (1 + icon + 1) + inset
        assert_eq!(view.row_height(), 6);

        let layout = view.layout(Rect::new(0, 0, 20, 20));
        assert_eq!(layout.tab_row, Rect::new(0, 14, 20, 6));
        assert_eq!(layout.content, Rect::new(0, 0, 20, 14));
        for (_, item) in &layout.items {
            assert_eq!(item.y, 15);
            assert_eq!(item.height, 3);
        }
    }

    #[test]
    fn test_content_region_is_disjoint_from_row() {
        let mut view = star_clock();
        let layout = view.layout(Rect::new(0, 0, 20, 10));
        assert!(!layout.content.intersects(layout.tab_row));
        assert_eq!(layout.content.bottom(), layout.tab_row.y);
    }

    #[test]
    fn test_rerender_is_identical() {
        let area = Rect::new(0, 0, 24, 10);
        let mut view = star_clock();
        let first = draw(&mut view, area);
        let second = draw(&mut view, area);
        assert_eq!(first, second);
        assert_eq!(view.selection(), 0);
    }

    #[test]
    fn test_click_activates_item() {
        let area = Rect::new(0, 0, 20, 10);
        let mut view = star_clock();

        // Clicks before any layout have nothing to hit
        assert_eq!(view.handle_click(15, 8), None);

        draw(&mut view, area);
        assert_eq!(view.handle_click(15, 8), Some(1));
        assert_eq!(view.selection(), 1);
        assert_eq!(view.handle_click(3, 8), Some(0));
        assert_eq!(view.selection(), 0);

        // Content region and divider are not pressable
        assert_eq!(view.handle_click(15, 2), None);
        assert_eq!(view.handle_click(15, 6), None);
        assert_eq!(view.selection(), 0);
    }

    #[test]
    fn test_mouse_release_activates() {
        let mut view = star_clock();
        view.layout(Rect::new(0, 0, 20, 10));

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 15,
            row: 8,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(view.handle_mouse(&press), None);
        assert_eq!(view.selection(), 0);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(view.handle_mouse(&release), Some(1));
        assert_eq!(view.selection(), 1);
    }

    #[test]
    fn test_activate_index_and_unknown_tag() {
        let mut view = star_clock();
        assert_eq!(view.activate_index(1), Some(1));
        assert_eq!(view.activate_index(5), None);
        assert_eq!(view.activate_tag(42), None);
        assert_eq!(view.selection(), 1);
    }

    #[test]
    fn test_remove_selected_tab_degrades_to_placeholder() {
        let mut view = star_clock();
        view.activate_tag(1);

        let removed = view.remove_tab(1).unwrap();
        assert_eq!(removed.tag(), 1);
        assert_eq!(view.tabs().len(), 1);
        assert_eq!(view.items().len(), 1);
        assert!(view.displayed().is_placeholder());

        view.push_tab(Tab::new("clock", 1, "C"));
        assert!(!view.displayed().is_placeholder());
    }

    #[test]
    fn test_duplicate_tags_first_match_wins() {
        let area = Rect::new(0, 0, 20, 10);
        let mut view = TabBarView::new(vec![Tab::new("star", 0, "A"), Tab::new("clock", 0, "B")]);
        assert_eq!(view.items().duplicate_tags(), vec![0]);

        let buf = draw(&mut view, area);
        let content = region_text(&buf, view.content_area().unwrap());
        assert!(content.contains('A'));
        assert!(!content.contains('B'));
    }

    #[test]
    fn test_custom_handle_name_is_measured() {
        let mut view = star_clock().with_handle_name("bottom_bar");
        assert_eq!(view.tab_row_bounds(), Rect::default());
        let layout = view.layout(Rect::new(0, 0, 10, 10));
        assert_eq!(view.handle_name(), "bottom_bar");
        assert_eq!(view.tab_row_bounds(), layout.tab_row);
    }

    #[test]
    fn test_remeasure_reads_latest_row_through_handle() {
        let mut view = star_clock();
        let first = view.layout(Rect::new(0, 0, 10, 12));
        assert_eq!(view.tab_row_bounds(), first.tab_row);

        // Shorter area on the next pass, the handle must see the new measurement
        let second = view.layout(Rect::new(0, 0, 10, 3));
        assert_eq!(second.tab_row.height, 3);
        assert_eq!(view.tab_row_bounds(), second.tab_row);
        assert_eq!(second.content.height, 0);
    }
}
