//! Cursors and list request options.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque pagination cursor.
///
/// Meaningful only to the server and stable for a given filter and sort.
/// Never parsed or rewritten; it must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a cursor string.
    #[must_use]
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    /// The raw cursor string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the cursor is the empty string, which the server never issues.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cursor {
    fn from(cursor: String) -> Self {
        Self(cursor)
    }
}

impl From<&str> for Cursor {
    fn from(cursor: &str) -> Self {
        Self(cursor.to_owned())
    }
}

/// Request shaping for order listings.
///
/// `query` is a Shopify search expression applied server-side
/// (e.g., `financial_status:paid tag:wholesale`).
///
/// At most one of `first`/`last` and at most one of `after`/`before` should
/// be set. This is the caller's contract and is not validated; when both of
/// a pair are set the page window picks `first` over `last` and `after`
/// over `before`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Server-side filter expression.
    pub query: String,
    /// Page size counted from the start of the window.
    pub first: Option<u32>,
    /// Page size counted from the end of the window.
    pub last: Option<u32>,
    /// Return items after this cursor.
    pub after: Option<Cursor>,
    /// Return items before this cursor.
    pub before: Option<Cursor>,
    /// Reverse the sort order.
    pub reverse: bool,
}

impl ListOptions {
    /// Options with a filter expression and nothing else.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set `first`.
    #[must_use]
    pub const fn first(mut self, n: u32) -> Self {
        self.first = Some(n);
        self
    }

    /// Set `last`.
    #[must_use]
    pub const fn last(mut self, n: u32) -> Self {
        self.last = Some(n);
        self
    }

    /// Set `after`.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<Cursor>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set `before`.
    #[must_use]
    pub fn before(mut self, cursor: impl Into<Cursor>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set `reverse`.
    #[must_use]
    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
