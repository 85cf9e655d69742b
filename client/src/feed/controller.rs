//! Feed controller
//!
//! Owns the pagination cursor, active filter, end-of-data flag, and
//! in-flight guard; decides when to fetch, whether to append or replace,
//! and when to stop requesting.
//!
//! Concurrency model: one logical thread of control, suspending only at the
//! query boundary. `is_fetching` is the sole gate for scroll-triggered
//! fetches. Filter-triggered fetches are not gated by it; instead every
//! request carries the generation counter active at dispatch, and responses
//! whose generation no longer matches at resolution are discarded, so a slow
//! pre-filter-change page can never corrupt post-change items.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{PresentationSink, RestaurantQuery};
use crate::error::InvalidRangeError;

use super::{FeedConfig, FeedState, FilterRange};

#[derive(Debug)]
struct FeedInner {
    filter: FilterRange,
    /// Pages fetched under the current filter
    cursor: usize,
    /// Bumped on every filter change; used purely for staleness detection
    generation: u64,
    state: FeedState,
}

impl Default for FeedInner {
    fn default() -> Self {
        Self {
            filter: FilterRange::default(),
            cursor: 0,
            generation: 0,
            state: FeedState::default(),
        }
    }
}

/// A page fetch tagged with the state it was dispatched under
struct PageRequest {
    skip: usize,
    filter: FilterRange,
    generation: u64,
    replace: bool,
}

/// The incremental, filtered, infinite-scroll restaurant feed
pub struct FeedController<Q, S>
where
    Q: RestaurantQuery,
    S: PresentationSink,
{
    query: Arc<Q>,
    sink: Arc<S>,
    config: FeedConfig,
    inner: Mutex<FeedInner>,
}

impl<Q, S> FeedController<Q, S>
where
    Q: RestaurantQuery,
    S: PresentationSink,
{
    pub fn new(query: Arc<Q>, sink: Arc<S>, config: FeedConfig) -> Self {
        Self {
            query,
            sink,
            config,
            inner: Mutex::new(FeedInner::default()),
        }
    }

    /// Current feed snapshot
    pub fn state(&self) -> FeedState {
        self.lock().state.clone()
    }

    /// The active rating filter
    pub fn filter(&self) -> FilterRange {
        self.lock().filter
    }

    /// Load the first page. Call once at startup.
    pub async fn initialize(&self) {
        let request = {
            let mut inner = self.lock();
            inner.cursor = 0;
            inner.state.has_more = true;
            inner.state.items.clear();
            inner.state.is_fetching = true;
            PageRequest {
                skip: 0,
                filter: inner.filter,
                generation: inner.generation,
                replace: true,
            }
        };

        self.load_page(request).await;
    }

    /// React to a scroll-position sample in `[0, 1]`
    ///
    /// Fetches the next page only when the ratio is past the threshold, the
    /// server has more, and no fetch is already in flight; a no-op otherwise.
    pub async fn on_scroll_threshold(&self, ratio: f64) {
        let request = {
            let mut inner = self.lock();
            if ratio <= self.config.scroll_threshold
                || !inner.state.has_more
                || inner.state.is_fetching
            {
                return;
            }

            inner.cursor += 1;
            inner.state.is_fetching = true;
            PageRequest {
                skip: inner.cursor * self.config.page_size,
                filter: inner.filter,
                generation: inner.generation,
                replace: false,
            }
        };

        self.load_page(request).await;
    }

    /// Replace the rating filter and reload the feed from the first page
    ///
    /// Not gated by `is_fetching`: a filter change supersedes any fetch
    /// still in flight for the old filter, whose response will be discarded.
    pub async fn on_filter_changed(&self, range: FilterRange) -> Result<(), InvalidRangeError> {
        range.validate()?;

        let request = {
            let mut inner = self.lock();
            inner.filter = range;
            inner.cursor = 0;
            inner.generation += 1;
            inner.state.has_more = true;
            inner.state.is_fetching = true;
            PageRequest {
                skip: 0,
                filter: range,
                generation: inner.generation,
                replace: true,
            }
        };

        self.load_page(request).await;
        Ok(())
    }

    async fn load_page(&self, request: PageRequest) {
        tracing::debug!(
            skip = request.skip,
            min = request.filter.min,
            max = request.filter.max,
            replace = request.replace,
            "fetching feed page"
        );

        let result = self
            .query
            .list_by_rating(
                self.config.page_size,
                request.skip,
                request.filter.min,
                request.filter.max,
                &self.config.order_by,
            )
            .await;

        let outcome = {
            let mut inner = self.lock();
            if inner.generation != request.generation {
                tracing::debug!("discarding response from a superseded filter");
                return;
            }

            match result {
                Ok(batch) => {
                    if batch.len() < self.config.page_size {
                        inner.state.has_more = false;
                    }
                    if request.replace {
                        inner.state.items = batch;
                    } else {
                        inner.state.items.extend(batch);
                    }
                    inner.state.is_fetching = false;
                    Ok(inner.state.clone())
                }
                Err(error) => {
                    inner.state.is_fetching = false;
                    Err(error)
                }
            }
        };

        // Sink callbacks run outside the lock.
        match outcome {
            Ok(state) => self.sink.on_feed_updated(state),
            Err(error) => {
                tracing::warn!("feed page fetch failed: {}", error);
                self.sink.on_feed_error(error);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
