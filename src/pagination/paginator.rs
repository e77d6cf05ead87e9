//! Bounded cursor paginator
//!
//! Drives a [`PageFetcher`] page by page, shrinking the requested page size
//! to the remaining `max_items` budget and stopping on cursor exhaustion,
//! budget exhaustion, an empty bounded page, or after one page in manual mode.

use super::fetcher::PageFetcher;
use super::types::{
    PageRequest, PageResult, PaginationConfig, PaginationPhase, PaginationState,
    PartialResultPolicy, StopReason,
};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, warn};

/// Outcome of a single fetch
enum Step<T> {
    /// A page arrived (possibly empty)
    Page(Vec<T>),
    /// A fetch failed and the partial result policy ended the run
    Interrupted(Error),
    /// Nothing left to fetch
    Finished,
}

/// Everything a completed traversal produced
#[derive(Debug)]
pub struct PaginationOutcome<T> {
    /// Items in the order they were received
    pub items: Vec<T>,
    /// Cursor at the point the traversal stopped, usable as a later start cursor.
    ///
    /// `None` when the last page was cut down to fit `max_items`: that cursor
    /// points past the dropped items, so resuming from it would skip them.
    pub next_cursor: Option<String>,
    /// Number of fetches that succeeded
    pub pages_fetched: u32,
    /// Why the traversal stopped
    pub stop_reason: StopReason,
    /// The failure that ended a run under [`PartialResultPolicy::StopEarly`]
    pub interrupted_by: Option<Error>,
    /// Items the remote returned beyond the budget and that were dropped
    pub items_dropped: u64,
}

impl<T> PaginationOutcome<T> {
    /// Check if the remote listing was read to its end
    pub fn is_complete(&self) -> bool {
        self.stop_reason == StopReason::CursorExhausted
    }

    /// Number of items gathered
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was gathered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pages through a cursor-based list operation
#[derive(Debug)]
pub struct Paginator<F> {
    fetcher: F,
    config: PaginationConfig,
}

impl<F: PageFetcher> Paginator<F> {
    /// Create a paginator over a fetcher
    pub fn new(fetcher: F, config: PaginationConfig) -> Self {
        Self { fetcher, config }
    }

    /// Get the pagination config
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch exactly one page from the start cursor and return it with its cursor.
    ///
    /// Ignores the configured mode: this is always a manual fetch.
    pub async fn fetch_single(&self) -> Result<PageResult<F::Item>> {
        let mut state = PaginationState::new(&self.config);
        match self.step(&mut state, true).await? {
            Step::Page(items) => Ok(PageResult::new(items, state.cursor)),
            Step::Interrupted(err) => Err(err),
            Step::Finished => Ok(PageResult::last(Vec::new())),
        }
    }

    /// Run the traversal to completion and gather every item
    pub async fn collect(&self) -> Result<PaginationOutcome<F::Item>> {
        let mut state = PaginationState::new(&self.config);
        let mut items = Vec::new();
        let mut interrupted_by = None;

        loop {
            match self.step(&mut state, self.config.manual).await? {
                Step::Page(page) => items.extend(page),
                Step::Interrupted(err) => {
                    interrupted_by = Some(err);
                    break;
                }
                Step::Finished => break,
            }
        }

        Ok(PaginationOutcome {
            items,
            next_cursor: state.cursor,
            pages_fetched: state.pages,
            stop_reason: state.stop_reason.unwrap_or(StopReason::CursorExhausted),
            interrupted_by,
            items_dropped: state.dropped,
        })
    }

    /// Lazily stream items, fetching the next page only when the current one is used up.
    ///
    /// Dropping the stream between pages cancels the traversal. A fetch
    /// already in flight when the stream is dropped is abandoned with it.
    ///
    /// A failed fetch ends the stream with that error as its last item under
    /// either [`PartialResultPolicy`]: the items before it were already handed
    /// out, so the consumer holds the partial result.
    pub fn stream(&self) -> impl Stream<Item = Result<F::Item>> + Send + '_ {
        let initial = PaginationState::new(&self.config);
        let manual = self.config.manual;

        stream::try_unfold(initial, move |mut state| async move {
            match self.step(&mut state, manual).await? {
                Step::Page(items) => Ok::<_, Error>(Some((items, state))),
                Step::Interrupted(err) => Err(err),
                Step::Finished => Ok(None),
            }
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
    }

    /// Perform one fetch and update the state
    async fn step(&self, state: &mut PaginationState, manual: bool) -> Result<Step<F::Item>> {
        if state.phase == PaginationPhase::Idle {
            if let Err(err) = self.config.validate() {
                state.fail();
                return Err(err);
            }
        }

        let page_size = state.next_page_size(self.config.service_max_page_size);
        if !state.begin_fetch() {
            return Ok(Step::Finished);
        }

        let request = PageRequest::new(state.cursor.clone(), page_size);
        debug!(
            page = state.pages + 1,
            cursor = ?request.cursor,
            page_size,
            "Fetching page"
        );

        let PageResult {
            mut items,
            next_cursor,
        } = match self.fetcher.fetch_page(request).await {
            Ok(page) => page,
            Err(err) => {
                if self.may_keep_partial(state) {
                    warn!(
                        emitted = state.emitted,
                        error = %err,
                        "Fetch failed mid-traversal, keeping partial result"
                    );
                    state.finish(StopReason::Interrupted);
                    return Ok(Step::Interrupted(err));
                }
                state.fail();
                return Err(err);
            }
        };

        // The remote may ignore the requested size; the budget still holds.
        let mut dropped = 0;
        if let Some(remaining) = state.remaining {
            if items.len() as u64 > remaining {
                dropped = items.len() as u64 - remaining;
                debug!(
                    returned = items.len(),
                    remaining, "Page exceeds remaining budget, truncating"
                );
                items.truncate(remaining as usize);
            }
        }

        let stop = state.record_page(items.len(), next_cursor, manual);
        if dropped > 0 {
            // The cursor skips the dropped items and cannot resume this listing
            state.dropped += dropped;
            state.cursor = None;
        }
        debug!(
            page = state.pages,
            items = items.len(),
            emitted = state.emitted,
            next_cursor = ?state.cursor,
            "Page received"
        );
        if let Some(reason) = stop {
            debug!(%reason, pages = state.pages, emitted = state.emitted, "Pagination finished");
        }

        Ok(Step::Page(items))
    }

    /// Check if a fetch failure may end the run with the items gathered so far
    fn may_keep_partial(&self, state: &PaginationState) -> bool {
        self.config.partial_results == PartialResultPolicy::StopEarly
            && state.is_bounded()
            && state.emitted > 0
    }
}

/// Run a full traversal over `fetcher` with `config`
///
/// ```rust,ignore
/// let config = PaginationConfig::new(50).with_max_items(120);
/// let outcome = paginate(&fetcher, config).await?;
/// assert!(outcome.len() <= 120);
/// ```
pub async fn paginate<F: PageFetcher>(
    fetcher: F,
    config: PaginationConfig,
) -> Result<PaginationOutcome<F::Item>> {
    Paginator::new(fetcher, config).collect().await
}
