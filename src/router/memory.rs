//! In-memory stand-ins for the browser, used on the host and in tests.

use std::cell::Cell;
use std::rc::Rc;

use super::{Browser, PageId, Toggle, nav::fragment_id};

/// Shared on/off flag. Clones observe the same state, so a test can keep one
/// clone while the registry owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryToggle(Rc<Cell<bool>>);

impl MemoryToggle {
    pub fn is_on(&self) -> bool {
        self.0.get()
    }
}

impl Toggle for MemoryToggle {
    fn set_on(&self, on: bool) {
        self.0.set(on);
    }
}

/// Session history with a cursor, like `window.history`.
#[derive(Clone, Debug)]
pub struct MemoryBrowser {
    entries: Vec<Option<String>>,
    cursor: usize,
    scrolls: usize,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self { entries: vec![None], cursor: 0, scrolls: 0 }
    }
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the address bar showing `hash` (with or without the `#`).
    pub fn with_fragment(hash: &str) -> Self {
        let id = if hash.starts_with('#') { fragment_id(hash) } else { Some(hash).filter(|h| !h.is_empty()) };
        Self { entries: vec![id.map(str::to_owned)], cursor: 0, scrolls: 0 }
    }

    /// Steps back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }
}

impl Browser for MemoryBrowser {
    fn fragment(&self) -> Option<String> {
        self.entries[self.cursor].clone()
    }

    fn push_fragment(&mut self, page: &PageId) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Some(page.as_str().to_owned()));
        self.cursor = self.entries.len() - 1;
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}
