// Tab bar errors
// Only configuration conversion can fail; rendering and activation never do

use thiserror::Error;

use crate::core::Tag;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabBarError {
    /// Two tabs in one bar share a tag, so one of them could never be shown
    #[error("tab bar '{hwnd}' has more than one tab with tag {tag}")]
    DuplicateTag { hwnd: String, tag: Tag },
}
