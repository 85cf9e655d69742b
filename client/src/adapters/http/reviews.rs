//! Review endpoints

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{NewReview, RestaurantId, Review, ReviewId};
use crate::domain::ports::ReviewsApi;
use crate::error::ApiError;

use super::ApiClient;

pub struct ReviewsClient {
    api: Arc<ApiClient>,
}

impl ReviewsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[derive(Serialize)]
struct CreateReviewRequest<'a> {
    restaurant_id: &'a RestaurantId,
    rating: u8,
    comment: &'a str,
}

#[derive(Serialize)]
struct AnswerReviewRequest<'a> {
    answer: &'a str,
}

#[async_trait]
impl ReviewsApi for ReviewsClient {
    async fn list_for_restaurant(
        &self,
        restaurant_id: &RestaurantId,
        top: usize,
        skip: usize,
    ) -> Result<Vec<Review>, ApiError> {
        self.api
            .get_json(&format!(
                "/reviews?restaurantId={}&top={}&skip={}",
                restaurant_id, top, skip
            ))
            .await
    }

    async fn create(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.api
            .post_json(
                "/reviews",
                &CreateReviewRequest {
                    restaurant_id: &review.restaurant_id,
                    rating: review.rating,
                    comment: &review.comment,
                },
            )
            .await
    }

    async fn answer(&self, id: &ReviewId, answer: &str) -> Result<Review, ApiError> {
        self.api
            .put_json(
                &format!("/reviews/{}/answer", id),
                &AnswerReviewRequest { answer },
            )
            .await
    }
}
