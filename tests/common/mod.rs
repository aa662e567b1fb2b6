//! Shared test infrastructure for gateway, selector and HTTP tests.
//!
//! - `MockBackend` - deterministic stand-in for the Gemini backend
//! - `GatedBackend` - replies only once the test releases it
//! - `payload()` / `payload_with()` - well-formed 3x6 response bodies
//! - `variant()` - a 6-point `SlideVariant` for layout tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use slidegen::gateway::{BackendError, GenerationGateway, GenerationRequest, SlideBackend};
use slidegen::models::slide::{IconName, SlidePoint, SlideVariant};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const SAMPLE_TEXT: &str =
    "Our team launched feature X, saw 30% engagement increase, and plans Y next.";

const ICONS: [&str; 6] = ["briefing", "brainstorm", "meeting", "marketing", "social", "results"];

// ============================================================================
// MOCK BACKEND
// ============================================================================

/// Backend returning a canned reply and recording every request.
pub struct MockBackend {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: std::sync::Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn replying(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.into()),
            calls: AtomicUsize::new(0),
            prompts: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            prompts: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().expect("prompt log poisoned").last().cloned()
    }
}

#[async_trait]
impl SlideBackend for MockBackend {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(request.prompt.clone());
        self.reply.clone().map_err(BackendError)
    }
}

/// Backend that holds every request until `release` is called.
pub struct GatedBackend {
    reply: String,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedBackend {
    pub fn new(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: body.into(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlideBackend for GatedBackend {
    async fn complete(&self, _request: &GenerationRequest) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}

/// Gateway over a shared backend, matching the type the server uses.
pub fn gateway<B: SlideBackend + 'static>(
    backend: &Arc<B>,
) -> GenerationGateway<Arc<dyn SlideBackend>> {
    let backend: Arc<dyn SlideBackend> = backend.clone();
    GenerationGateway::new(backend, "Spanish")
}

// ============================================================================
// PAYLOADS
// ============================================================================

/// A well-formed payload: `variants` versions with `points` points each.
/// Titles are `V{v}P{p}` (1-based) so order can be asserted.
pub fn payload_with(variants: usize, points: usize) -> String {
    let data: Vec<Vec<serde_json::Value>> = (1..=variants)
        .map(|v| {
            (1..=points)
                .map(|p| {
                    json!({
                        "title": format!("V{v}P{p}"),
                        "description": format!("Description of point {p} in version {v}."),
                        "icon": ICONS[(p - 1) % ICONS.len()],
                    })
                })
                .collect()
        })
        .collect();
    serde_json::to_string(&data).expect("serialize payload")
}

/// The standard 3x6 payload.
pub fn payload() -> String {
    payload_with(3, 6)
}

/// A 6-point variant with distinct titles `Point 1..6`.
pub fn variant() -> SlideVariant {
    (1..=6)
        .map(|i| SlidePoint {
            title: format!("Point {i}"),
            description: format!("Description {i}."),
            icon: IconName::from_tag(ICONS[(i - 1) % ICONS.len()]),
        })
        .collect()
}
