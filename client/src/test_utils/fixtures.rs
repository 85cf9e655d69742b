//! Test fixtures

use chrono::{Duration, Utc};

use crate::domain::entities::{Restaurant, RestaurantId, Role};
use crate::session::Session;

/// A restaurant with the given name and average rating
pub fn test_restaurant(name: &str, average_rating: f32) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(),
        name: name.to_string(),
        city: "Bologna".to_string(),
        address: "Via Marsala 12".to_string(),
        img: "https://example.com/card.jpg".to_string(),
        description: "A cozy place with hand-rolled pasta and a short wine list.".to_string(),
        average_rating,
    }
}

/// One restaurant per rating, named by position
pub fn rated_restaurants(ratings: &[f32]) -> Vec<Restaurant> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| test_restaurant(&format!("restaurant-{}", i + 1), rating))
        .collect()
}

pub fn test_session(role: Role) -> Session {
    Session {
        token: "test-token".to_string(),
        expires: Utc::now() + Duration::hours(8),
        email: "anna@example.com".to_string(),
        role,
    }
}
