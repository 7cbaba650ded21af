use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::{debug, warn};

use crate::config::Config;

use super::{
    errors::ChatError,
    history::{ChatPublisher, HistorySource, PAGE_SIZE},
    models::{ChatMessage, PublishRequest},
};

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Discord-backed implementation of [`HistorySource`] and [`ChatPublisher`].
///
/// Every request carries the bot authorization header and the per-request
/// timeout from [`Config`]. Transient failures (429, 5xx, connect/timeout
/// errors) are retried with exponential backoff before giving up.
pub struct DiscordChatClient {
    http: reqwest::Client,
    messages_url: String,
    auth_header: String,
}

impl DiscordChatClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            messages_url: format!("{}/channels/{}/messages", config.api_base, config.channel_id),
            auth_header: format!("Bot {}", config.bot_token),
        })
    }

    fn is_transient(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    async fn send_with_retry<F>(&self, build: F) -> Result<reqwest::Response, ChatError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        retry_with_backoff(|| {
            let request = build();
            async move {
                match request.send().await {
                    Ok(response) if response.status().is_success() => Ok(response),
                    Ok(response) if Self::is_transient(response.status()) => {
                        Err(AttemptError::Transient(ChatError::Status(response.status())))
                    }
                    Ok(response) => Err(AttemptError::Fatal(ChatError::Status(response.status()))),
                    Err(err) if err.is_timeout() || err.is_connect() => {
                        Err(AttemptError::Transient(ChatError::Http(err)))
                    }
                    Err(err) => Err(AttemptError::Fatal(ChatError::Http(err))),
                }
            }
        })
        .await
    }
}

/// Per-attempt failure classification for [`retry_with_backoff`].
enum AttemptError {
    /// Worth another attempt (rate limit, server error, timeout).
    Transient(ChatError),
    /// Retrying cannot help (auth failure, malformed request).
    Fatal(ChatError),
}

/// Runs `attempt_op` up to [`MAX_ATTEMPTS`] times, sleeping with doubling
/// backoff between attempts. Fatal errors return immediately; a transient
/// error on the final attempt is returned as-is.
async fn retry_with_backoff<T, F, Fut>(mut attempt_op: F) -> Result<T, ChatError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, AttemptError>>,
{
    let mut backoff = INITIAL_BACKOFF;
    let mut attempt = 0;

    loop {
        attempt += 1;
        match attempt_op().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Transient(err)) if attempt < MAX_ATTEMPTS => {
                warn!(error = %err, attempt, "Transient chat API failure, retrying");
            }
            Err(AttemptError::Transient(err)) | Err(AttemptError::Fatal(err)) => return Err(err),
        }

        tokio::time::sleep(backoff).await;
        backoff *= 2;
    }
}

#[async_trait]
impl HistorySource for DiscordChatClient {
    async fn fetch_page(&self, before: Option<&str>) -> Result<Vec<ChatMessage>, ChatError> {
        let response = self
            .send_with_retry(|| {
                let mut request = self
                    .http
                    .get(&self.messages_url)
                    .header(header::AUTHORIZATION, &self.auth_header)
                    .query(&[("limit", PAGE_SIZE.to_string())]);
                if let Some(before) = before {
                    request = request.query(&[("before", before)]);
                }
                request
            })
            .await?;

        let page: Vec<ChatMessage> = response.json().await?;
        debug!(len = page.len(), ?before, "Fetched history page");
        Ok(page)
    }
}

#[async_trait]
impl ChatPublisher for DiscordChatClient {
    async fn publish(&self, content: &str) -> Result<(), ChatError> {
        let body = PublishRequest {
            content,
            tts: false,
        };

        self.send_with_retry(|| {
            self.http
                .post(&self.messages_url)
                .header(header::AUTHORIZATION, &self.auth_header)
                .json(&body)
        })
        .await
        .map_err(|err| ChatError::Publish(err.to_string()))?;

        debug!(length = content.len(), "Posted summary to channel");
        Ok(())
    }
}
