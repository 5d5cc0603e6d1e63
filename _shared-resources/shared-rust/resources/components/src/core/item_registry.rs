// Item Registry
// Tab items register (tag, content) here when mounted and leave when unmounted.
// The tab bar resolves the content to display by reading this registry directly.

use std::collections::BTreeMap;
use std::fmt;

use super::{TabContentRef, Tag};

/// Handle returned by `ItemRegistry::mount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

struct ItemEntry {
    id: ItemId,
    tag: Tag,
    content: TabContentRef,
}

/// Ordered registry of mounted tab items
pub struct ItemRegistry {
    /// Entries in mount order
    entries: Vec<ItemEntry>,
    /// Next item ID to assign
    next_id: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Register an item's content under its tag
    /// Duplicate tags are kept; `resolve` returns the earliest one
    pub fn mount(&mut self, tag: Tag, content: TabContentRef) -> ItemId {
        if self.entries.iter().any(|entry| entry.tag == tag) {
            tracing::warn!(tag, "tab tag mounted more than once, the first item wins");
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(ItemEntry { id, tag, content });
        id
    }

    /// Remove a previously mounted item
    pub fn unmount(&mut self, id: ItemId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Content of the first mounted item carrying `tag`
    pub fn resolve(&self, tag: Tag) -> Option<&TabContentRef> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| &entry.content)
    }

    /// All `(tag, content)` pairs in mount order
    pub fn entries(&self) -> impl Iterator<Item = (Tag, &TabContentRef)> {
        self.entries.iter().map(|entry| (entry.tag, &entry.content))
    }

    /// Tags registered by more than one item, ascending
    pub fn duplicate_tags(&self) -> Vec<Tag> {
        let mut counts: BTreeMap<Tag, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.tag).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(tag, _)| tag)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| (entry.id, entry.tag)))
            .finish()
    }
}
