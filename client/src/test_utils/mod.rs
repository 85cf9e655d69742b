//! Test helpers: fixtures and in-memory port implementations

mod fixtures;
mod mocks;

pub use fixtures::{rated_restaurants, test_restaurant, test_session};
pub use mocks::{InMemoryRestaurantQuery, RecordingSink};
