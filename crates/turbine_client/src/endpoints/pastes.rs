//! Paste endpoints.

use crate::client::{ApiClient, RequestOptions};
use crate::error::ClientError;
use crate::outcome::ApiOutcome;
use reqwest::Method;
use serde_json::Value;
use turbine_core::models::{CreatePaste, Paste, PasteCreated, PastePreview};

impl ApiClient {
    /// Fetch a paste by id.
    pub async fn get_paste(
        &self,
        id: &str,
        options: RequestOptions,
    ) -> Result<ApiOutcome<Paste>, ClientError> {
        self.request(Method::GET, &format!("/pastes/{}", id), options)
            .await
    }

    /// Create a paste. Succeeds with a 201 and the new paste's id.
    pub async fn create_paste(
        &self,
        payload: &CreatePaste,
        mut options: RequestOptions,
    ) -> Result<ApiOutcome<PasteCreated>, ClientError> {
        options.json = Some(serde_json::to_value(payload)?);
        self.request(Method::POST, "/pastes", options).await
    }

    /// Toggle the requester's star on a paste.
    ///
    /// The response shape is owned by the backend and passed through as-is.
    pub async fn toggle_star(
        &self,
        id: &str,
        options: RequestOptions,
    ) -> Result<ApiOutcome<Value>, ClientError> {
        self.request(Method::PUT, &format!("/pastes/{}/stars", id), options)
            .await
    }

    /// List one page of a user's pastes.
    pub async fn list_pastes(
        &self,
        user_id: &str,
        page: u32,
        options: RequestOptions,
    ) -> Result<ApiOutcome<Vec<PastePreview>>, ClientError> {
        self.request(
            Method::GET,
            &format!("/users/{}/pastes/{}", user_id, page),
            options,
        )
        .await
    }

    /// List one page of the pastes a user has starred.
    pub async fn list_starred(
        &self,
        user_id: &str,
        page: u32,
        options: RequestOptions,
    ) -> Result<ApiOutcome<Vec<PastePreview>>, ClientError> {
        self.request(
            Method::GET,
            &format!("/users/{}/stars/{}", user_id, page),
            options,
        )
        .await
    }
}
