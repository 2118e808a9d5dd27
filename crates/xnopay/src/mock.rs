//! In-memory transport for unit tests.

use std::{collections::VecDeque, sync::Mutex};

use crate::{
    concepts::RpcTransport,
    types::{AnyJson, RpcRequest},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

/// Replays queued answers in order and records every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<AnyJson, MockError>>>,
    requests: Mutex<Vec<AnyJson>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: AnyJson) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(MockError(message.to_string())));
        self
    }

    /// Every request sent so far, as the JSON that would go on the wire.
    pub fn requests(&self) -> Vec<AnyJson> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> AnyJson {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl RpcTransport for MockTransport {
    type Error = MockError;

    fn send(
        &self,
        request: &RpcRequest,
    ) -> impl Future<Output = Result<AnyJson, Self::Error>> + Send {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(MockError("no response queued".to_string())));

        std::future::ready(response)
    }
}
