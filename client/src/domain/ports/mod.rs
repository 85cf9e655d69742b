//! Port traits
//!
//! Interfaces between the core and the outside world. The API ports are
//! implemented by the reqwest adapters (and by in-memory mocks in tests);
//! the presentation port is implemented by whatever renders the feed.

mod api;
mod sink;

pub use api::{AccountApi, RestaurantQuery, RestaurantsApi, ReviewsApi};
pub use sink::PresentationSink;
