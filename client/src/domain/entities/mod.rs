//! Domain entities
//!
//! Wire-facing types mirror the JSON the Tavola API serves; the `New*` form
//! models carry the same validation rules the server enforces.

mod restaurant;
mod review;
mod user;

pub use restaurant::{NewRestaurant, Restaurant, RestaurantDetails, RestaurantId};
pub use review::{NewReview, Review, ReviewId};
pub use user::{Credentials, NewUser, Role};

use crate::error::ValidationError;

/// Character-count bounds check shared by the form models
pub(crate) fn check_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }

    Ok(())
}
