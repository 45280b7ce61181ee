//! Pager cursor state
//!
//! Two cursor slots plus a started flag. `previous_cursor == None` means the
//! pager sits on the first page (or has not moved yet); `next_cursor == None`
//! after a navigation means the last page has been reached.

use crate::models::PageEnvelope;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerState {
    /// Cursor the next forward call resolves
    pub next_cursor: Option<String>,
    /// Cursor the next backward call resolves
    pub previous_cursor: Option<String>,
    /// Whether any page has been shown yet
    started: bool,
}

impl PagerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No page has been shown yet.
    pub fn is_at_start(&self) -> bool {
        !self.started
    }

    /// Backward navigation has nowhere to go.
    pub fn is_at_beginning(&self) -> bool {
        self.previous_cursor.is_none()
    }

    /// A page has been shown and the server reported no page after it.
    pub fn is_at_end(&self) -> bool {
        self.started && self.next_cursor.is_none()
    }

    /// Adopts the cursors of a freshly shown page.
    ///
    /// Empty strings are treated as absent cursors.
    pub fn apply(&mut self, page: &PageEnvelope) {
        self.next_cursor = non_empty(page.next_cursor.as_deref());
        self.previous_cursor = non_empty(page.previous_cursor.as_deref());
        self.started = true;
    }
}

fn non_empty(cursor: Option<&str>) -> Option<String> {
    cursor.filter(|c| !c.is_empty()).map(str::to_string)
}
