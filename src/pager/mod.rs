//! Pager Module
//!
//! Walks a paginated collection forward and backward, serving pages from the
//! [`ExpiringCache`] when possible and from a [`PageSource`] otherwise.

mod source;
mod state;

pub use source::PageSource;
pub use state::PagerState;

use tracing::debug;

use crate::cache::{get_or_fetch, ExpiringCache};
use crate::error::{PokedexError, Result};
use crate::models::PageEnvelope;

// == Pager ==
/// Cursor state machine over one paginated collection.
///
/// ```text
/// Start --forward--> Page1 {prev: none} --forward--> Page2 {prev: P1} --backward--> Page1
/// ```
///
/// State only changes after a page has been resolved, so a failed navigation
/// leaves the pager where it was.
#[derive(Debug, Clone)]
pub struct Pager {
    first_page: String,
    state: PagerState,
}

impl Pager {
    /// Creates a pager that starts at `first_page`.
    pub fn new(first_page: impl Into<String>) -> Self {
        Self {
            first_page: first_page.into(),
            state: PagerState::new(),
        }
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn first_page(&self) -> &str {
        &self.first_page
    }

    // == Forward ==
    /// Shows the next page, or the first page if nothing has been shown yet.
    ///
    /// # Errors
    /// - `AtEnd` once the server has reported there is no next page
    /// - `Fetch` / `Decode` if the page cannot be resolved
    pub async fn forward<S>(&mut self, cache: &ExpiringCache, source: &S) -> Result<PageEnvelope>
    where
        S: PageSource + ?Sized,
    {
        let cursor = if self.state.is_at_start() {
            self.first_page.clone()
        } else {
            self.state.next_cursor.clone().ok_or(PokedexError::AtEnd)?
        };

        self.navigate(cache, source, &cursor).await
    }

    // == Backward ==
    /// Shows the previous page.
    ///
    /// # Errors
    /// - `AtBeginning` on the first page; no fetch is attempted
    /// - `Fetch` / `Decode` if the page cannot be resolved
    pub async fn backward<S>(&mut self, cache: &ExpiringCache, source: &S) -> Result<PageEnvelope>
    where
        S: PageSource + ?Sized,
    {
        let cursor = self
            .state
            .previous_cursor
            .clone()
            .ok_or(PokedexError::AtBeginning)?;

        self.navigate(cache, source, &cursor).await
    }

    async fn navigate<S>(
        &mut self,
        cache: &ExpiringCache,
        source: &S,
        cursor: &str,
    ) -> Result<PageEnvelope>
    where
        S: PageSource + ?Sized,
    {
        let page = get_or_fetch(cache, cursor, || source.fetch_page(cursor)).await?;
        self.state.apply(&page);
        debug!(
            cursor,
            next = ?self.state.next_cursor,
            previous = ?self.state.previous_cursor,
            "pager moved"
        );
        Ok(page)
    }
}
