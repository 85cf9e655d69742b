//! The incremental restaurant feed
//!
//! One component owns all pagination state: the current rating filter, how
//! many pages have been fetched under it, whether the server has more, and
//! whether a fetch is in flight. It reacts to scroll and filter events and
//! reports snapshots to a [`PresentationSink`](crate::domain::ports::PresentationSink).

mod controller;

pub use controller::FeedController;

use crate::domain::entities::Restaurant;
use crate::error::InvalidRangeError;

/// The accepted average-rating window for the feed
///
/// Valid iff `0 <= min <= max <= 5`. Replacing the active range resets
/// pagination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRange {
    pub min: f32,
    pub max: f32,
}

impl FilterRange {
    pub const MIN_RATING: f32 = 0.0;
    pub const MAX_RATING: f32 = 5.0;

    pub fn new(min: f32, max: f32) -> Result<Self, InvalidRangeError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        let bounds = Self::MIN_RATING..=Self::MAX_RATING;
        if !bounds.contains(&self.min) || !bounds.contains(&self.max) || self.min > self.max {
            return Err(InvalidRangeError {
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

impl Default for FilterRange {
    fn default() -> Self {
        Self {
            min: Self::MIN_RATING,
            max: Self::MAX_RATING,
        }
    }
}

/// Tunable constants for the feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Restaurants per page
    pub page_size: usize,
    /// Scroll-position ratio above which the next page is fetched
    pub scroll_threshold: f64,
    /// Server-side ordering key
    pub order_by: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            scroll_threshold: 0.6,
            order_by: "average_rating".to_string(),
        }
    }
}

/// A snapshot of the feed handed to the presentation sink
///
/// `items` preserves server order. It only ever grows (scroll append) or is
/// replaced wholesale (filter change), never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub items: Vec<Restaurant>,
    pub has_more: bool,
    pub is_fetching: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            has_more: true,
            is_fetching: false,
        }
    }
}

/// Scroll-position ratio in `[0, 1]`, computed as
/// `scroll_top / (scroll_height - client_height)`
///
/// Returns 0 when the content fits the viewport (no scrollable distance).
pub fn scroll_ratio(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_top / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_full() {
        let range = FilterRange::default();
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 5.0);
        assert!(range.validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let err = FilterRange::new(4.0, 1.0).unwrap_err();
        assert_eq!(err.min, 4.0);
        assert_eq!(err.max, 1.0);
    }

    #[test]
    fn out_of_bounds_range_rejected() {
        assert!(FilterRange::new(-0.5, 3.0).is_err());
        assert!(FilterRange::new(0.0, 5.5).is_err());
        assert!(FilterRange::new(f32::NAN, 5.0).is_err());
    }

    #[test]
    fn equal_bounds_accepted() {
        assert!(FilterRange::new(3.5, 3.5).is_ok());
    }

    #[test]
    fn scroll_ratio_midway() {
        let ratio = scroll_ratio(300.0, 1000.0, 500.0);
        assert!((ratio - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn scroll_ratio_clamped_to_one() {
        assert_eq!(scroll_ratio(900.0, 1000.0, 500.0), 1.0);
    }

    #[test]
    fn scroll_ratio_zero_when_content_fits() {
        assert_eq!(scroll_ratio(0.0, 400.0, 500.0), 0.0);
    }
}
