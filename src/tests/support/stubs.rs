use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::cv::application::ports::outgoing::{CvSource, CvSourceError};

const STUB_LOCATION: &str = "stub://cv-data.json";

/// Answers every fetch with the same result.
#[derive(Debug, Clone)]
pub struct StaticCvSource {
    result: Result<Vec<u8>, CvSourceError>,
}

impl StaticCvSource {
    pub fn body(body: &str) -> Self {
        Self {
            result: Ok(body.as_bytes().to_vec()),
        }
    }

    pub fn error(err: CvSourceError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CvSource for StaticCvSource {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError> {
        self.result.clone()
    }

    fn location(&self) -> &str {
        STUB_LOCATION
    }
}

/// Answers fetches from a queue, one entry per call.
#[derive(Debug, Clone)]
pub struct SequenceCvSource {
    results: Arc<Mutex<VecDeque<Result<Vec<u8>, CvSourceError>>>>,
    calls: Arc<AtomicUsize>,
}

impl SequenceCvSource {
    pub fn new(results: Vec<Result<Vec<u8>, CvSourceError>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CvSource for SequenceCvSource {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("SequenceCvSource ran out of responses")
    }

    fn location(&self) -> &str {
        STUB_LOCATION
    }
}

/// Signals used to hold a fetch in flight.
#[derive(Debug, Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

/// Blocks inside `fetch` until the test releases the gate.
#[derive(Debug, Clone)]
pub struct GatedCvSource {
    gate: Arc<Gate>,
    result: Result<Vec<u8>, CvSourceError>,
}

impl GatedCvSource {
    pub fn new(result: Result<Vec<u8>, CvSourceError>) -> Self {
        Self {
            gate: Arc::new(Gate::default()),
            result,
        }
    }

    pub fn gate(&self) -> Arc<Gate> {
        Arc::clone(&self.gate)
    }
}

#[async_trait]
impl CvSource for GatedCvSource {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError> {
        self.gate.started.notify_one();
        self.gate.release.notified().await;
        self.result.clone()
    }

    fn location(&self) -> &str {
        STUB_LOCATION
    }
}
