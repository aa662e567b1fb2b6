use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gateway::{GenerationError, GenerationGateway, SlideBackend};
use crate::models::slide::{GenerationResult, SlideStyle, SlideVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Which generated variant is shown, and in which style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub variant: usize,
    pub style: SlideStyle,
}

/// Local rejection of a submit; the gateway is never called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyInput,
    Busy,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyInput => write!(f, "input text is empty"),
            SubmitError::Busy => write!(f, "a generation is already in progress"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A submission that entered `Loading`; hand it back to `finish_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub text: String,
}

/// Per-session presentation state.
///
/// `Ready` holds a result and `Failed` holds an error message; the two are
/// never present together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    source: String,
    phase: Phase,
    result: Option<GenerationResult>,
    error: Option<String>,
    selection: Selection,
    ticket: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The selected variant, when a result is present.
    pub fn current_variant(&self) -> Option<&SlideVariant> {
        self.result.as_ref()?.variant(self.selection.variant)
    }

    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
    }

    /// Validate the pending input and enter `Loading`.
    ///
    /// Blank input and re-entry while loading leave the state untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.phase == Phase::Loading {
            return Err(SubmitError::Busy);
        }
        if self.source.trim().is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        self.ticket += 1;
        self.phase = Phase::Loading;
        self.result = None;
        self.error = None;
        self.selection = Selection::default();

        Ok(Submission { ticket: self.ticket, text: self.source.clone() })
    }

    /// Apply a gateway outcome. Returns false if the submission went stale.
    pub fn finish_submit(
        &mut self,
        ticket: u64,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> bool {
        if self.phase != Phase::Loading || self.ticket != ticket {
            log::debug!("Dropping stale generation outcome for ticket {ticket}");
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.selection = Selection::default();
                self.phase = Phase::Ready;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
                self.selection = Selection::default();
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Run a whole submission against `gateway`.
    pub async fn submit<B: SlideBackend>(
        &mut self,
        gateway: &GenerationGateway<B>,
    ) -> Result<(), SubmitError> {
        let submission = self.begin_submit()?;
        let outcome = gateway.generate(&submission.text).await;
        self.finish_submit(submission.ticket, outcome);
        Ok(())
    }

    /// Ignored unless a result is present and `index` addresses one of its variants.
    pub fn select_variant(&mut self, index: usize) {
        match &self.result {
            Some(result) if index < result.len() => self.selection.variant = index,
            _ => log::debug!("Ignoring selection of variant {index}"),
        }
    }

    pub fn select_style(&mut self, style: SlideStyle) {
        self.selection.style = style;
    }

    /// Back to `Idle`. The ticket survives so in-flight outcomes are dropped.
    pub fn reset(&mut self) {
        *self = Self { ticket: self.ticket, ..Self::default() };
    }
}
