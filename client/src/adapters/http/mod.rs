//! reqwest implementations of the REST API ports

mod account;
mod client;
mod restaurants;
mod reviews;

pub use account::AccountClient;
pub use client::ApiClient;
pub use restaurants::RestaurantsClient;
pub use reviews::ReviewsClient;
