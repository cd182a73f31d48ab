use crate::domains::SubscriptionRequest;
use crate::utils::error_chain_fmt;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use std::fmt::Formatter;

const API_KEY_USERNAME: &str = "apikey";

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeStatus {
    Success,
    #[serde(other)]
    Error,
}

/// Reply body of the mailing-list service.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SubscribeResponse {
    pub result: SubscribeStatus,
    #[serde(default)]
    pub msg: String,
}

#[derive(thiserror::Error)]
pub enum MailingListError {
    #[error("Failed to reach the mailing list service")]
    Transport(#[source] reqwest::Error),
    #[error("The mailing list service replied with an unexpected payload")]
    UnexpectedPayload(#[source] reqwest::Error),
}

impl std::fmt::Debug for MailingListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Talks to the third-party list. No timeout is set: a call resolves when
/// the transport does.
pub struct MailingListClient {
    http_client: Client,
    endpoint: Url,
    api_key: Secret<String>,
}

impl MailingListClient {
    pub fn new(endpoint: Url, api_key: Secret<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Sends one subscription request. The reply body is decoded whatever
    /// the status code, since list errors are reported in the body.
    pub async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscribeResponse, MailingListError> {
        let response = self.http_client
            .post(self.endpoint.clone())
            .basic_auth(API_KEY_USERNAME, Some(self.api_key.expose_secret()))
            .json(request)
            .send()
            .await
            .map_err(MailingListError::Transport)?;

        response
            .json::<SubscribeResponse>()
            .await
            .map_err(MailingListError::UnexpectedPayload)
    }
}
