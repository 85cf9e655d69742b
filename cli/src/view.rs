//! Terminal rendering: the scroll viewport and the presentation sink

use tavola_client::domain::entities::{RestaurantDetails, Review};
use tavola_client::domain::ports::PresentationSink;
use tavola_client::error::ApiError;
use tavola_client::feed::{scroll_ratio, FeedState};

/// A fixed-height window over the feed list
///
/// Stands in for the browser viewport: `ratio()` is the same
/// scroll-position computation the web client derives from
/// `scrollTop / (scrollHeight - clientHeight)`, with list rows as the unit.
#[derive(Debug)]
pub struct Viewport {
    height: usize,
    position: usize,
    total: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            height: height.max(1),
            position: 0,
            total: 0,
        }
    }

    /// Track the current feed length
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.position = self.position.min(self.max_scroll());
    }

    /// Jump back to the top (filter change, refresh)
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Scroll one window height down, clamped to the end of the list
    pub fn page_down(&mut self) {
        self.position = (self.position + self.height).min(self.max_scroll());
    }

    /// Scroll-position ratio to feed to the controller
    pub fn ratio(&self) -> f64 {
        scroll_ratio(self.position as f64, self.total as f64, self.height as f64)
    }

    /// Rows currently on screen
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.position..(self.position + self.height).min(self.total)
    }

    fn max_scroll(&self) -> usize {
        self.total.saturating_sub(self.height)
    }
}

/// Reports feed updates and errors from the controller
///
/// List rendering belongs to the command loop, which knows the viewport;
/// printing here as well would draw every fetched page twice.
pub struct TerminalSink;

impl PresentationSink for TerminalSink {
    fn on_feed_updated(&self, state: FeedState) {
        tracing::debug!(
            items = state.items.len(),
            has_more = state.has_more,
            "feed updated"
        );
    }

    fn on_feed_error(&self, error: ApiError) {
        println!("feed error: {}", error);
    }
}

/// Print the rows visible through the viewport, with an end-of-feed footer
pub fn render_feed(state: &FeedState, viewport: &Viewport) {
    println!();
    for line in feed_lines(state, viewport) {
        println!("{}", line);
    }
}

fn feed_lines(state: &FeedState, viewport: &Viewport) -> Vec<String> {
    let mut lines: Vec<String> = state.items[viewport.visible()]
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{:>3}. {:.1}* {} - {}, {}",
                viewport.visible().start + i + 1,
                r.average_rating,
                r.name,
                r.city,
                r.address
            )
        })
        .collect();

    lines.push(if state.has_more {
        format!("     ... ({} loaded, scroll down for more)", state.items.len())
    } else {
        format!("     --- end of feed ({} restaurants) ---", state.items.len())
    });

    lines
}

pub fn print_details(details: &RestaurantDetails, reviews: &[Review]) {
    println!();
    println!("{}  {:.1}*", details.name, details.average_rating);
    println!("{}, {}", details.address, details.city);
    println!();
    println!("{}", details.description);

    // If min_review exists, max_review is guaranteed to exist too.
    if let (Some(min), Some(max)) = (&details.min_review, &details.max_review) {
        println!();
        println!("lowest rated:");
        print_review(min);
        println!("highest rated:");
        print_review(max);
    }

    if !reviews.is_empty() {
        println!();
        println!("recent reviews:");
        for review in reviews {
            print_review(review);
        }
    }
}

pub fn print_review(review: &Review) {
    println!(
        "  [{}] {}* {} - {} ({})",
        review.timestamp.format("%Y-%m-%d"),
        review.rating,
        review.reviewer,
        review.comment,
        review.id
    );
    if let Some(answer) = &review.answer {
        println!("      owner: {}", answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_client::domain::entities::{Restaurant, RestaurantId};

    fn rated_feed(ratings: &[f32], has_more: bool) -> FeedState {
        FeedState {
            items: ratings
                .iter()
                .enumerate()
                .map(|(i, &rating)| Restaurant {
                    id: RestaurantId::new(),
                    name: format!("restaurant-{}", i + 1),
                    city: "Bologna".to_string(),
                    address: "Via Marsala 12".to_string(),
                    img: "https://example.com/card.jpg".to_string(),
                    description: "A cozy place with hand-rolled pasta.".to_string(),
                    average_rating: rating,
                })
                .collect(),
            has_more,
            is_fetching: false,
        }
    }

    #[test]
    fn feed_lines_cover_only_the_visible_window() {
        let state = rated_feed(&[5.0, 4.5, 4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0], true);
        let mut viewport = Viewport::new(3);
        viewport.set_total(9);
        viewport.page_down();

        let lines = feed_lines(&state, &viewport);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  4."));
        assert!(lines[0].contains("restaurant-4"));
        assert!(lines[2].contains("restaurant-6"));
        assert!(lines[3].contains("scroll down for more"));
    }

    #[test]
    fn feed_lines_mark_the_end_of_the_feed() {
        let state = rated_feed(&[5.0, 4.0], false);
        let mut viewport = Viewport::new(3);
        viewport.set_total(2);

        let lines = feed_lines(&state, &viewport);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("end of feed (2 restaurants)"));
    }

    #[test]
    fn viewport_ratio_progresses_toward_one() {
        let mut viewport = Viewport::new(6);
        viewport.set_total(9);
        assert_eq!(viewport.ratio(), 0.0);

        viewport.page_down();
        assert_eq!(viewport.ratio(), 1.0);
        assert_eq!(viewport.visible(), 3..9);
    }

    #[test]
    fn viewport_ratio_zero_when_feed_fits() {
        let mut viewport = Viewport::new(6);
        viewport.set_total(4);
        viewport.page_down();
        assert_eq!(viewport.ratio(), 0.0);
        assert_eq!(viewport.visible(), 0..4);
    }

    #[test]
    fn viewport_reset_returns_to_top() {
        let mut viewport = Viewport::new(3);
        viewport.set_total(12);
        viewport.page_down();
        viewport.page_down();
        assert!(viewport.ratio() > 0.6);

        viewport.reset();
        assert_eq!(viewport.ratio(), 0.0);
        assert_eq!(viewport.visible(), 0..3);
    }
}
