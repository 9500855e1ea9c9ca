use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::payload::Payload;

/// A chat webhook that accepts `{"content": ...}` messages.
pub struct Webhook {
    url: String,
    client: Client,
}

impl Webhook {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: &str, client: Client) -> Self {
        Self {
            url: String::from(url),
            client,
        }
    }

    /// Posts `message` once. The response status is returned as-is, a
    /// non-success status is not an error.
    pub fn send_message(&self, message: &str) -> Result<StatusCode> {
        info!("Sending message to webhook");
        debug!("Message is {} bytes", message.len());

        let response = self
            .client
            .post(&self.url)
            .json(&Payload::new(message))
            .send()
            .with_context(|| format!("failed to send message to {}", self.url))?;

        let status = response.status();
        debug!("Webhook responded with {}", status);

        Ok(status)
    }
}

/// Sends `message` to `destination` with a fresh client.
pub fn dispatch(destination: &str, message: &str) -> Result<()> {
    Webhook::new(destination)?.send_message(message)?;
    Ok(())
}
