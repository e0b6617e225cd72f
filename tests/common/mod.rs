//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use mars_photos::data::MarsPhotosRepository;
use mars_photos::model::MarsPhoto;
use mars_photos::network::NetworkError;
use mars_photos::ui::home::MarsUiState;
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{oneshot, watch};

pub type FetchResult = Result<Vec<MarsPhoto>, NetworkError>;

/// Get a free port on localhost; nothing listens on it afterwards.
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .expect("bind free port")
        .local_addr()
        .expect("local addr")
        .port()
}

pub fn sample_photos(count: usize) -> Vec<MarsPhoto> {
    (0..count)
        .map(|i| MarsPhoto {
            id: i.to_string(),
            image_url: format!("https://mars.nasa.gov/{i}.jpg"),
        })
        .collect()
}

pub fn http_error(status: u16) -> NetworkError {
    NetworkError::Http {
        status: StatusCode::from_u16(status).unwrap(),
    }
}

pub fn decode_error() -> NetworkError {
    NetworkError::from(serde_json::from_str::<Vec<MarsPhoto>>("{\"not\": \"a list\"}").unwrap_err())
}

enum Step {
    Ready(FetchResult),
    Gated(oneshot::Receiver<FetchResult>),
}

/// Repository that replays scripted outcomes in call order.
///
/// Gated steps block until the test releases them through the returned
/// sender, which lets tests control completion order.
pub struct ScriptedRepository {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn then(self, result: FetchResult) -> Self {
        self.steps.lock().push_back(Step::Ready(result));
        self
    }

    pub fn push_gated(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.steps.lock().push_back(Step::Gated(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarsPhotosRepository for ScriptedRepository {
    async fn get_mars_photos(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front();
        match step {
            Some(Step::Ready(result)) => result,
            Some(Step::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(http_error(503))),
            None => Ok(Vec::new()),
        }
    }
}

/// Wait (bounded) until the published state leaves `Loading`.
pub async fn settled(states: &mut watch::Receiver<MarsUiState>) -> MarsUiState {
    let state = tokio::time::timeout(Duration::from_secs(5), states.wait_for(MarsUiState::is_settled))
        .await
        .expect("state did not settle in time")
        .expect("view model dropped");
    (*state).clone()
}

/// Record every state published on `states` until it settles.
pub async fn record_until_settled(states: &mut watch::Receiver<MarsUiState>) -> Vec<MarsUiState> {
    let mut seen = vec![states.borrow_and_update().clone()];
    while seen.last().map_or(true, MarsUiState::is_loading) {
        tokio::time::timeout(Duration::from_secs(5), states.changed())
            .await
            .expect("no state change in time")
            .expect("view model dropped");
        seen.push(states.borrow_and_update().clone());
    }
    seen
}
