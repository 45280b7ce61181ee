//! Page envelope for paginated PokeAPI collections
//!
//! The serde shape matches the API's list responses, so the bytes the cache
//! stores round-trip through the same decoding as a fresh fetch.

use serde::{Deserialize, Serialize};

/// A named link to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "canalave-city-area"
    pub name: String,
    /// Resource locator
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of a paginated collection plus its neighbouring cursors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Items on this page, in server order
    #[serde(rename = "results")]
    pub items: Vec<NamedResource>,
    /// Cursor of the following page, absent on the last page
    #[serde(rename = "next", default)]
    pub next_cursor: Option<String>,
    /// Cursor of the preceding page, absent on the first page
    #[serde(rename = "previous", default)]
    pub previous_cursor: Option<String>,
}

impl PageEnvelope {
    pub fn new(
        items: Vec<NamedResource>,
        next_cursor: Option<String>,
        previous_cursor: Option<String>,
    ) -> Self {
        Self {
            items,
            next_cursor,
            previous_cursor,
        }
    }

    /// Item names in page order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}
