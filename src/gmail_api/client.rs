use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{Label, LabelsResponse, Message, MessagesResponse, Profile};

const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

// One fixed deadline applied uniformly to every request; no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated read-only client for the Gmail REST v1 API.
pub struct GmailClient {
    http: Client,
    token: String,
    base_url: String,
}

impl GmailClient {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests to point at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::RemoteRequest {
                status: response.status(),
                endpoint: endpoint.to_string(),
            })
        }
    }

    /// Fetch the label list for the authenticated account.
    pub async fn get_labels(&self) -> Result<Vec<Label>, ApiError> {
        let data: LabelsResponse = self.get_json("labels", &[]).await?;
        Ok(data.labels.unwrap_or_default())
    }

    /// Fetch the account profile metadata.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("profile", &[]).await
    }

    /// Fetch up to `limit` most recent message IDs, in server recency order.
    pub async fn list_message_ids(&self, limit: u32) -> Result<Vec<String>, ApiError> {
        let data: MessagesResponse = self
            .get_json("messages", &[("maxResults", limit.to_string())])
            .await?;
        Ok(data
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.id)
            .collect())
    }

    /// Fetch full detail for one message. The server's default format
    /// already carries the full payload, so no query parameters are sent.
    pub async fn get_message(&self, id: &str) -> Result<Message, ApiError> {
        self.get_json(&format!("messages/{}", id), &[]).await
    }
}
