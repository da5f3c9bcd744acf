use crate::core::contact::{ContactPayload, EmailRelayConfig, SendError};
use gloo::net::http::Request;

/// POST the message to the email relay. Any non-2xx answer is a rejection.
pub async fn send(config: &EmailRelayConfig, payload: &ContactPayload) -> Result<(), SendError> {
    let body = config.request(payload);
    log::info!("[contact] sending via {}", config.endpoint);
    let response = Request::post(&config.endpoint)
        .json(&body)
        .map_err(|e| SendError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SendError::Transport(e.to_string()))?;
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(SendError::Rejected { status, body })
}
