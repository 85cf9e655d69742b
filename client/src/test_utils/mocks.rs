//! In-memory implementations of the port traits
//!
//! `InMemoryRestaurantQuery` plays the server: it filters, orders, and
//! slices a seeded restaurant list. Individual calls can be parked on a
//! gate or made to fail, so tests can pin down in-flight interleavings
//! deterministically.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::domain::entities::Restaurant;
use crate::domain::ports::{PresentationSink, RestaurantQuery};
use crate::error::ApiError;
use crate::feed::FeedState;

#[derive(Default)]
pub struct InMemoryRestaurantQuery {
    restaurants: Vec<Restaurant>,
    calls: AtomicUsize,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    failures: Mutex<VecDeque<u16>>,
    started_tx: Mutex<Option<mpsc::UnboundedSender<()>>>,
}

impl InMemoryRestaurantQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backing restaurant list
    pub fn with_restaurants(mut self, restaurants: Vec<Restaurant>) -> Self {
        self.restaurants = restaurants;
        self
    }

    /// Park the next un-gated call until the returned sender fires
    pub fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Fail the next call with the given HTTP status
    ///
    /// Claimed at call entry, so a queued failure sticks to the next call to
    /// arrive even if that call is parked on a gate.
    pub fn fail_next(&self, status: u16) {
        self.failures.lock().unwrap().push_back(status);
    }

    /// Signal on every subsequent call as soon as it enters the query
    pub fn notify_started(&self) -> mpsc::UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.started_tx.lock().unwrap() = Some(tx);
        rx
    }

    /// Number of queries dispatched so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RestaurantQuery for InMemoryRestaurantQuery {
    async fn list_by_rating(
        &self,
        top: usize,
        skip: usize,
        min_rating: f32,
        max_rating: f32,
        order_by: &str,
    ) -> Result<Vec<Restaurant>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(tx) = self.started_tx.lock().unwrap().as_ref() {
            let _ = tx.send(());
        }

        let failure = self.failures.lock().unwrap().pop_front();
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            // A dropped sender releases the gate too.
            let _ = rx.await;
        }

        if let Some(status) = failure {
            return Err(ApiError::Api {
                status,
                message: "simulated server failure".to_string(),
            });
        }

        let mut matched: Vec<Restaurant> = self
            .restaurants
            .iter()
            .filter(|r| r.average_rating >= min_rating && r.average_rating <= max_rating)
            .cloned()
            .collect();

        if order_by == "average_rating" {
            matched.sort_by(|a, b| {
                b.average_rating
                    .partial_cmp(&a.average_rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        Ok(matched.into_iter().skip(skip).take(top).collect())
    }
}

/// A presentation sink that records everything it is told
#[derive(Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<FeedState>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn updates(&self) -> Vec<FeedState> {
        self.updates.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl PresentationSink for RecordingSink {
    fn on_feed_updated(&self, state: FeedState) {
        self.updates.lock().unwrap().push(state);
    }

    fn on_feed_error(&self, error: ApiError) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}
