//! Adapters: concrete implementations of the port traits

pub mod http;

pub use http::{AccountClient, ApiClient, RestaurantsClient, ReviewsClient};
