//! Scripted transport shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::error::ClientError;
use super::transport::{ApiRequest, RawResponse, Transport};

pub enum Scripted {
    Ready(Result<RawResponse, ClientError>),
    /// Resolves when the test sends on the paired channel.
    Pending(oneshot::Receiver<RawResponse>),
}

/// Replays scripted responses in order and records every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: RawResponse) -> &Self {
        self.script.lock().unwrap().push_back(Scripted::Ready(Ok(response)));
        self
    }

    pub fn push_err(&self, err: ClientError) -> &Self {
        self.script.lock().unwrap().push_back(Scripted::Ready(Err(err)));
        self
    }

    pub fn push_pending(&self) -> oneshot::Sender<RawResponse> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Scripted::Pending(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Pending(rx)) => rx.await.map_err(|_| ClientError::Transport("sender dropped".into())),
            None => Err(ClientError::Transport("no scripted response".into())),
        }
    }
}

pub fn json_response(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        status_text: canonical_text(status).to_owned(),
        content_type: Some("application/json".to_owned()),
        body: body.to_string(),
    }
}

pub fn text_response(status: u16, status_text: &str, body: &str) -> RawResponse {
    RawResponse {
        status,
        status_text: status_text.to_owned(),
        content_type: Some("text/html; charset=utf-8".to_owned()),
        body: body.to_owned(),
    }
}

pub fn healthy() -> RawResponse {
    json_response(200, serde_json::json!({"status": "ok", "database": "ok"}))
}

pub fn login_ok(id: i64, username: &str, rol: Option<&str>, email: Option<&str>) -> RawResponse {
    json_response(200, serde_json::json!({"user": {"id": id, "username": username, "rol": rol, "email": email}}))
}

fn canonical_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}
