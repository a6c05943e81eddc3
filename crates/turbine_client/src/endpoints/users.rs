//! User and authentication endpoints.

use crate::client::{ApiClient, RequestOptions};
use crate::error::ClientError;
use crate::outcome::ApiOutcome;
use reqwest::Method;
use serde_json::json;
use turbine_core::models::{Credentials, GithubRegistration, LoginResponse, Registration, User};

impl ApiClient {
    /// Exchange credentials for a session token.
    pub async fn login(
        &self,
        credentials: &Credentials,
        mut options: RequestOptions,
    ) -> Result<ApiOutcome<LoginResponse>, ClientError> {
        options.json = Some(serde_json::to_value(credentials)?);
        self.request(Method::POST, "/login", options).await
    }

    /// Exchange a GitHub authorization code for a session token.
    pub async fn login_github(
        &self,
        access_code: &str,
        mut options: RequestOptions,
    ) -> Result<ApiOutcome<LoginResponse>, ClientError> {
        options.json = Some(json!({ "access_code": access_code }));
        self.request(Method::POST, "/login/github", options).await
    }

    /// Register a new account. Succeeds with a 201 and a session token.
    pub async fn register(
        &self,
        registration: &Registration,
        mut options: RequestOptions,
    ) -> Result<ApiOutcome<LoginResponse>, ClientError> {
        options.json = Some(serde_json::to_value(registration)?);
        self.request(Method::POST, "/register", options).await
    }

    /// Register a new account through a GitHub authorization code.
    pub async fn register_github(
        &self,
        registration: &GithubRegistration,
        mut options: RequestOptions,
    ) -> Result<ApiOutcome<LoginResponse>, ClientError> {
        options.json = Some(serde_json::to_value(registration)?);
        self.request(Method::POST, "/register/github", options).await
    }

    /// Fetch the profile belonging to the request's token.
    pub async fn get_me(
        &self,
        options: RequestOptions,
    ) -> Result<ApiOutcome<User>, ClientError> {
        self.request(Method::GET, "/users/me", options).await
    }

    /// Fetch a user profile by id.
    pub async fn get_user(
        &self,
        id: &str,
        options: RequestOptions,
    ) -> Result<ApiOutcome<User>, ClientError> {
        self.request(Method::GET, &format!("/users/{}", id), options)
            .await
    }
}
