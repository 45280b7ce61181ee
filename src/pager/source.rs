//! Page source seam
//!
//! The pager never talks HTTP itself; it asks a [`PageSource`] for pages it
//! does not find in the cache.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PageEnvelope;

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches and decodes the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<PageEnvelope>;
}
