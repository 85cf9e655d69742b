//! Restaurant domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::check_len;
use super::review::Review;
use crate::error::ValidationError;

/// Unique identifier for a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub Uuid);

impl RestaurantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RestaurantId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RestaurantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant as it appears in the feed
///
/// `average_rating` is computed server-side; the client passes it through
/// unchanged and never re-derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub img: String,
    pub description: String,
    pub average_rating: f32,
}

/// A restaurant's detail view, with its lowest- and highest-rated reviews
///
/// If `min_review` is present, `max_review` is guaranteed present too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub id: RestaurantId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub img: String,
    pub description: String,
    pub average_rating: f32,
    pub min_review: Option<Review>,
    pub max_review: Option<Review>,
}

/// Data needed to create a restaurant (owner accounts only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub city: String,
    pub address: String,
    pub img: String,
    pub description: String,
}

impl NewRestaurant {
    /// Validate against the server's creation rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len("name", &self.name, 5, 60)?;
        check_len("city", &self.city, 5, 30)?;
        check_len("address", &self.address, 5, 100)?;
        check_len("description", &self.description, 30, 500)?;

        if !self.img.starts_with("http://") && !self.img.starts_with("https://") {
            return Err(ValidationError::InvalidUrl);
        }

        Ok(())
    }
}
