// Tab Descriptor
// Immutable configuration for one tab: icon, optional caption, tag and content

use std::fmt;
use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
};

use crate::utilities::render_centered;

/// Integer key identifying a tab within one bar
pub type Tag = i64;

/// Anything the tab bar can draw into its content region
pub trait TabContent {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Shared handle to tab content (the UI is single-threaded)
pub type TabContentRef = Rc<dyn TabContent>;

impl TabContent for &'static str {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_centered(Text::raw(*self), Style::default(), area, buf);
    }
}

impl TabContent for String {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_centered(Text::raw(self.as_str()), Style::default(), area, buf);
    }
}

/// Styled text, centered in the content region
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    text: Text<'static>,
    style: Style,
}

impl TextContent {
    pub fn new(text: impl Into<Text<'static>>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl TabContent for TextContent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_centered(self.text.clone(), self.style, area, buf);
    }
}

/// Content drawn by a closure
pub struct FnContent<F>(F);

impl<F> TabContent for FnContent<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn render(&self, area: Rect, buf: &mut Buffer) {
        (self.0)(area, buf)
    }
}

/// Wrap a drawing closure as tab content
pub fn content_fn<F>(f: F) -> FnContent<F>
where
    F: Fn(Rect, &mut Buffer),
{
    FnContent(f)
}

/// One configured tab
#[derive(Clone)]
pub struct Tab {
    icon: String,
    label: Option<String>,
    tag: Tag,
    content: TabContentRef,
}

impl Tab {
    pub fn new(icon: impl Into<String>, tag: Tag, content: impl TabContent + 'static) -> Self {
        Self::from_shared(icon, None::<String>, tag, Rc::new(content))
    }

    /// Build a tab around content that is already shared
    pub fn from_shared(
        icon: impl Into<String>,
        label: Option<impl Into<String>>,
        tag: Tag,
        content: TabContentRef,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.map(Into::into),
            tag,
            content,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn content(&self) -> &TabContentRef {
        &self.content
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
