//! Review domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::check_len;
use super::restaurant::RestaurantId;
use crate::error::ValidationError;

/// Unique identifier for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ReviewId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review left on a restaurant
///
/// `answer` is the owner's reply, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// E-mail of the reviewing user
    pub reviewer: String,
    pub rating: u8,
    pub timestamp: DateTime<Utc>,
    pub comment: String,
    pub answer: Option<String>,
}

/// Data needed to create a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub restaurant_id: RestaurantId,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    /// Validate against the server's creation rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rating < 1 || self.rating > 5 {
            return Err(ValidationError::RatingOutOfRange);
        }

        check_len("comment", &self.comment, 30, 300)
    }
}
