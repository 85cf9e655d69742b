//! Restaurant endpoints

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantDetails, RestaurantId};
use crate::domain::ports::{RestaurantQuery, RestaurantsApi};
use crate::error::ApiError;

use super::ApiClient;

pub struct RestaurantsClient {
    api: Arc<ApiClient>,
}

impl RestaurantsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[derive(Serialize)]
struct CreateRestaurantRequest<'a> {
    name: &'a str,
    city: &'a str,
    address: &'a str,
    img: &'a str,
    description: &'a str,
}

fn list_path(top: usize, skip: usize, min_rating: f32, max_rating: f32, order_by: &str) -> String {
    format!(
        "/restaurants?top={}&skip={}&minRating={}&maxRating={}&orderBy={}",
        top, skip, min_rating, max_rating, order_by
    )
}

#[async_trait]
impl RestaurantQuery for RestaurantsClient {
    async fn list_by_rating(
        &self,
        top: usize,
        skip: usize,
        min_rating: f32,
        max_rating: f32,
        order_by: &str,
    ) -> Result<Vec<Restaurant>, ApiError> {
        self.api
            .get_json(&list_path(top, skip, min_rating, max_rating, order_by))
            .await
    }
}

#[async_trait]
impl RestaurantsApi for RestaurantsClient {
    async fn get(&self, id: &RestaurantId) -> Result<RestaurantDetails, ApiError> {
        self.api.get_json(&format!("/restaurants/{}", id)).await
    }

    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, ApiError> {
        self.api
            .post_json(
                "/restaurants",
                &CreateRestaurantRequest {
                    name: &restaurant.name,
                    city: &restaurant.city,
                    address: &restaurant.address,
                    img: &restaurant.img,
                    description: &restaurant.description,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_matches_api_contract() {
        assert_eq!(
            list_path(9, 18, 2.5, 5.0, "average_rating"),
            "/restaurants?top=9&skip=18&minRating=2.5&maxRating=5&orderBy=average_rating"
        );
    }
}
