//! Pagination types
//!
//! Defines the page request/result pair exchanged with a fetcher, the
//! configuration of a traversal, and the state it mutates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Treat an empty cursor the same as an absent one
pub fn normalize_cursor(cursor: Option<String>) -> Option<String> {
    cursor.filter(|c| !c.is_empty())
}

// ============================================================================
// Page Request / Result
// ============================================================================

/// One call's worth of pagination parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Where to resume; `None` starts from the beginning
    pub cursor: Option<String>,
    /// Number of items to ask for (always at least 1)
    pub page_size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(cursor: Option<String>, page_size: u32) -> Self {
        Self {
            cursor: normalize_cursor(cursor),
            page_size,
        }
    }

    /// Create a request for the first page
    pub fn first(page_size: u32) -> Self {
        Self::new(None, page_size)
    }
}

/// One page returned by a remote list operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    /// Items in the order the remote returned them
    pub items: Vec<T>,
    /// Continuation cursor; `None` means there are no more pages
    pub next_cursor: Option<String>,
}

impl<T> PageResult<T> {
    /// Create a page; an empty cursor is stored as `None`
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            items,
            next_cursor: normalize_cursor(next_cursor),
        }
    }

    /// Create the final page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Check if more pages follow this one
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// What to do when a fetch fails after a bounded traversal already produced items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialResultPolicy {
    /// Fail the whole traversal
    #[default]
    Propagate,
    /// Stop and keep what was gathered
    StopEarly,
}

/// Configuration for one pagination run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Largest page the remote service accepts
    pub service_max_page_size: u32,
    /// Cursor to resume from
    pub start_cursor: Option<String>,
    /// Cap on the total number of items produced
    pub max_items: Option<u64>,
    /// Fetch exactly one page and hand back its cursor
    pub manual: bool,
    /// Handling of mid-stream failures under a `max_items` bound
    pub partial_results: PartialResultPolicy,
}

impl PaginationConfig {
    /// Create a config for a service with the given page size cap
    pub fn new(service_max_page_size: u32) -> Self {
        Self {
            service_max_page_size,
            start_cursor: None,
            max_items: None,
            manual: false,
            partial_results: PartialResultPolicy::default(),
        }
    }

    /// Resume from a cursor
    #[must_use]
    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = normalize_cursor(Some(cursor.into()));
        self
    }

    /// Limit the total number of items
    #[must_use]
    pub fn with_max_items(mut self, max_items: u64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Fetch a single page only
    #[must_use]
    pub fn manual(mut self) -> Self {
        self.manual = true;
        self
    }

    /// Set the partial result policy
    #[must_use]
    pub fn with_partial_results(mut self, policy: PartialResultPolicy) -> Self {
        self.partial_results = policy;
        self
    }

    /// Validate the config before a run
    pub fn validate(&self) -> Result<()> {
        if self.service_max_page_size == 0 {
            return Err(Error::invalid_value(
                "service_max_page_size",
                "must be at least 1",
            ));
        }
        if self.max_items == Some(0) {
            return Err(Error::invalid_value("max_items", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// State
// ============================================================================

/// Lifecycle of a single traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationPhase {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is in flight
    FetchingPage,
    /// A page arrived and its items are being handed out
    Emitting,
    /// Finished successfully
    Exhausted,
    /// Finished with an error
    Failed,
}

impl PaginationPhase {
    /// Check if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }
}

/// Why a traversal stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The remote returned no continuation cursor
    CursorExhausted,
    /// `max_items` items were produced
    BudgetConsumed,
    /// A bounded request came back empty while a cursor was still present
    EmptyPage,
    /// Manual mode fetched its one page
    SinglePage,
    /// A fetch failed and the partial result policy kept what was gathered
    Interrupted,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CursorExhausted => "cursor_exhausted",
            Self::BudgetConsumed => "budget_consumed",
            Self::EmptyPage => "empty_page",
            Self::SinglePage => "single_page",
            Self::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

/// Mutable state owned by one traversal
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next fetch
    pub cursor: Option<String>,
    /// Items produced so far
    pub emitted: u64,
    /// Items still allowed; `None` when unbounded
    pub remaining: Option<u64>,
    /// Pages fetched so far
    pub pages: u32,
    /// Current phase
    pub phase: PaginationPhase,
    /// Set once the traversal exhausts
    pub stop_reason: Option<StopReason>,
    /// Items discarded because a page overran the budget
    pub dropped: u64,
}

impl PaginationState {
    /// Create fresh state for a run
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            cursor: config.start_cursor.clone(),
            remaining: config.max_items,
            ..Default::default()
        }
    }

    /// Check if a `max_items` bound applies
    pub fn is_bounded(&self) -> bool {
        self.remaining.is_some()
    }

    /// Check if the traversal is over
    pub fn is_done(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Page size for the next fetch: the service cap shrunk to the remaining budget
    pub fn next_page_size(&self, service_max_page_size: u32) -> u32 {
        let size = match self.remaining {
            Some(remaining) => u64::from(service_max_page_size).min(remaining) as u32,
            None => service_max_page_size,
        };
        size.max(1)
    }

    /// Enter `FetchingPage`; returns false if the traversal already finished
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.phase = PaginationPhase::FetchingPage;
        true
    }

    /// Account for a fetched page and decide whether to continue.
    ///
    /// Returns the stop reason when this page ends the traversal.
    pub fn record_page(
        &mut self,
        count: usize,
        next_cursor: Option<String>,
        manual: bool,
    ) -> Option<StopReason> {
        let count = count as u64;
        self.pages += 1;
        self.emitted += count;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(count);
        }
        self.cursor = normalize_cursor(next_cursor);
        self.phase = PaginationPhase::Emitting;

        let reason = if manual {
            Some(StopReason::SinglePage)
        } else if self.cursor.is_none() {
            Some(StopReason::CursorExhausted)
        } else if self.remaining == Some(0) {
            Some(StopReason::BudgetConsumed)
        } else if self.is_bounded() && count == 0 {
            Some(StopReason::EmptyPage)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.finish(reason);
        }
        reason
    }

    /// Move to `Exhausted`
    pub fn finish(&mut self, reason: StopReason) {
        if !self.is_done() {
            self.phase = PaginationPhase::Exhausted;
            self.stop_reason = Some(reason);
        }
    }

    /// Move to `Failed`
    pub fn fail(&mut self) {
        if !self.is_done() {
            self.phase = PaginationPhase::Failed;
        }
    }
}
