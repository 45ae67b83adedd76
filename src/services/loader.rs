use serde_json::Value;

use crate::domain::constants::{INVALID_JSON_INPUT, SAMPLE_DATA_NOTICE};
use crate::report;

/// Where the active document came from. At most one document is active;
/// every transition fully replaces it.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Pending,
    Fetched(Value),
    Fallback(Value, String),
    Override(Value),
}

/// Acquisition state machine for the report document.
///
/// Sources are tried in priority order: the configured retrieval source,
/// then the bundled sample, then user-submitted text. The first success
/// wins, and once any source succeeds a document stays present for the
/// rest of the process lifetime. Retrieval failure is recovered locally
/// and surfaced only as a non-fatal message; invalid user input never
/// touches the active document.
#[derive(Debug, Clone)]
pub struct ReportLoader {
    outcome: LoadOutcome,
    message: Option<String>,
}

impl Default for ReportLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLoader {
    pub fn new() -> Self {
        Self {
            outcome: LoadOutcome::Pending,
            message: None,
        }
    }

    /// Feed the settled result of the single startup retrieval attempt.
    /// Failure falls back to the bundled sample and sets the advisory.
    pub fn settle(&mut self, attempt: anyhow::Result<Value>) {
        match attempt {
            Ok(doc) => {
                self.outcome = LoadOutcome::Fetched(doc);
                self.message = None;
            }
            Err(reason) => {
                self.outcome = LoadOutcome::Fallback(report::sample_document(), reason.to_string());
                self.message = Some(SAMPLE_DATA_NOTICE.to_string());
            }
        }
    }

    /// Submit raw user text. Valid JSON replaces the active document and
    /// clears any message; anything else leaves the document untouched and
    /// sets the rejection message. Returns whether the text was accepted.
    pub fn submit_text(&mut self, text: &str) -> bool {
        match serde_json::from_str::<Value>(text) {
            Ok(doc) => {
                self.outcome = LoadOutcome::Override(doc);
                self.message = None;
                true
            }
            Err(_) => {
                self.message = Some(INVALID_JSON_INPUT.to_string());
                false
            }
        }
    }

    /// Unconditionally switch to the bundled sample and clear any message.
    pub fn use_sample(&mut self) {
        self.outcome = LoadOutcome::Override(report::sample_document());
        self.message = None;
    }

    pub fn document(&self) -> Option<&Value> {
        match &self.outcome {
            LoadOutcome::Pending => None,
            LoadOutcome::Fetched(doc) | LoadOutcome::Override(doc) => Some(doc),
            LoadOutcome::Fallback(doc, _) => Some(doc),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.outcome {
            LoadOutcome::Fallback(_, reason) => Some(reason),
            _ => None,
        }
    }

    pub fn state_label(&self) -> &'static str {
        match self.outcome {
            LoadOutcome::Pending => "loading",
            _ => "loaded",
        }
    }

    pub fn source_label(&self) -> &'static str {
        match self.outcome {
            LoadOutcome::Pending => "pending",
            LoadOutcome::Fetched(_) => "fetched",
            LoadOutcome::Fallback(..) => "fallback",
            LoadOutcome::Override(_) => "override",
        }
    }
}
