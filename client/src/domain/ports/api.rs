//! REST API port traits

use async_trait::async_trait;

use crate::domain::entities::{
    Credentials, NewRestaurant, NewReview, NewUser, Restaurant, RestaurantDetails, RestaurantId,
    Review, ReviewId,
};
use crate::error::ApiError;
use crate::session::Session;

/// The restaurant query service the feed controller pages through
///
/// `top`/`skip` are the page size and offset; results arrive ordered by the
/// server according to `order_by` and are never re-sorted client-side.
#[async_trait]
pub trait RestaurantQuery: Send + Sync {
    async fn list_by_rating(
        &self,
        top: usize,
        skip: usize,
        min_rating: f32,
        max_rating: f32,
        order_by: &str,
    ) -> Result<Vec<Restaurant>, ApiError>;
}

/// Restaurant detail and creation operations
#[async_trait]
pub trait RestaurantsApi: Send + Sync {
    /// Fetch a single restaurant with its lowest/highest reviews
    async fn get(&self, id: &RestaurantId) -> Result<RestaurantDetails, ApiError>;

    /// Create a restaurant (owner accounts only)
    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, ApiError>;
}

/// Review operations
#[async_trait]
pub trait ReviewsApi: Send + Sync {
    /// List reviews for a restaurant, most recent first
    async fn list_for_restaurant(
        &self,
        restaurant_id: &RestaurantId,
        top: usize,
        skip: usize,
    ) -> Result<Vec<Review>, ApiError>;

    /// Leave a review
    async fn create(&self, review: &NewReview) -> Result<Review, ApiError>;

    /// Answer a review (owner accounts only, one answer per review)
    async fn answer(&self, id: &ReviewId, answer: &str) -> Result<Review, ApiError>;
}

/// Account operations
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Exchange credentials for a session token
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Register a new account
    async fn register(&self, user: &NewUser) -> Result<(), ApiError>;
}
