//! Account endpoints

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Credentials, NewUser};
use crate::domain::ports::AccountApi;
use crate::error::ApiError;
use crate::session::Session;

use super::ApiClient;

pub struct AccountClient {
    api: Arc<ApiClient>,
}

impl AccountClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    is_owner: bool,
}

#[derive(Deserialize)]
struct RegisterResponse {
    #[allow(dead_code)]
    ok: bool,
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let session: Session = self
            .api
            .post_json(
                "/token",
                &LoginRequest {
                    email: &credentials.email,
                    password: &credentials.password,
                },
            )
            .await?;

        // Publish to subscribers and start signing requests with the token.
        self.api.session().set(session.clone());

        Ok(session)
    }

    async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        let _: RegisterResponse = self
            .api
            .post_json(
                "/users",
                &RegisterRequest {
                    email: &user.email,
                    password: &user.password,
                    confirm_password: &user.confirm_password,
                    is_owner: user.is_owner,
                },
            )
            .await?;

        Ok(())
    }
}
