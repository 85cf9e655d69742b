//! Presentation port

use crate::error::ApiError;
use crate::feed::FeedState;

/// Receives feed snapshots and errors from the feed controller
///
/// Called after every fetch resolution that was not discarded as stale.
/// Snapshots are owned copies; the controller keeps the authoritative state.
pub trait PresentationSink: Send + Sync {
    fn on_feed_updated(&self, state: FeedState);

    fn on_feed_error(&self, error: ApiError);
}
