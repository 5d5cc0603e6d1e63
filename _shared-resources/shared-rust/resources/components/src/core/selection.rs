// Selection State
// The active tag of one tab bar, owned by the bar and lent to its items

use super::Tag;

/// Currently active tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    tag: Tag,
}

impl Selection {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    /// The active tag
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether `tag` is the active tag
    pub fn is(&self, tag: Tag) -> bool {
        self.tag == tag
    }

    /// Make `tag` the active tag
    /// Returns false if it already was
    pub fn select(&mut self, tag: Tag) -> bool {
        if self.tag == tag {
            return false;
        }
        tracing::debug!(from = self.tag, to = tag, "tab selection changed");
        self.tag = tag;
        true
    }
}
