//! Diagnosis chat: one prediction request per submitted symptom description.
//!
//! DESIGN
//! ======
//! [`DiagnosisState::submit`] appends the user line plus an "analyzing"
//! placeholder and hands back a [`PendingRequest`]; the component performs
//! the HTTP call and feeds the outcome to [`DiagnosisState::resolve`].
//!
//! Requests are numbered. Submitting again while a request is in flight
//! supersedes it: the old placeholder goes away and the old response is
//! discarded when it eventually arrives, so answers never render out of
//! order.
//!
//! SCROLLING
//! =========
//! `scroll_seq` increments whenever the transcript should follow the newest
//! message. The user's own line only requests a scroll when the viewport was
//! already near the bottom; the placeholder and the final answer always do.

#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod diagnosis_test;

use super::transcript::{Author, Tone, Transcript};

pub const ANALYZING_TEXT: &str = "Analyzing symptoms...";
pub const NO_PREDICTION_TEXT: &str = "No prediction returned.";

/// Parsed answer from the prediction endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionResult {
    pub primary: Option<String>,
    pub alternates: Vec<String>,
    pub department: Option<String>,
    pub error: Option<String>,
}

/// Turn a prediction into the assistant lines to show, in order.
#[must_use]
pub fn render_prediction(result: &PredictionResult) -> Vec<(Tone, String)> {
    if let Some(error) = &result.error {
        return vec![(Tone::Error, format!("⚠️ Error: {error}"))];
    }

    let mut lines = Vec::new();
    let condition = if result.alternates.len() > 1 {
        Some(result.alternates.join("** or **"))
    } else {
        result.primary.clone()
    };
    if let Some(condition) = &condition {
        lines.push((
            Tone::Normal,
            format!("🩺 Based on your symptoms, you may be experiencing **{condition}**."),
        ));
    }
    if let Some(department) = &result.department {
        lines.push((Tone::Normal, format!("🏥 Recommended Department: **{department}**")));
    }
    if condition.is_none() {
        lines.push((Tone::Normal, NO_PREDICTION_TEXT.to_owned()));
    }
    lines
}

/// Line shown when the request itself failed (network or body parse).
#[must_use]
pub fn render_failure(detail: &str) -> String {
    format!("Request failed: {detail}")
}

/// A request the component should send now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InFlight {
    seq: u64,
    placeholder: u64,
}

/// State of one diagnosis chat instance.
#[derive(Clone, Debug, Default)]
pub struct DiagnosisState {
    pub transcript: Transcript,
    pub scroll_seq: u64,
    in_flight: Option<InFlight>,
    next_seq: u64,
}

impl DiagnosisState {
    /// Start a request for `raw`. Blank input returns `None` and changes
    /// nothing. `near_bottom` is whether the transcript viewport sat near its
    /// bottom edge before this call.
    pub fn submit(&mut self, raw: &str, near_bottom: bool) -> Option<PendingRequest> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(stale) = self.in_flight.take() {
            self.transcript.remove_placeholder(stale.placeholder);
        }

        self.transcript.push(Author::User, text);
        if near_bottom {
            self.request_scroll();
        }

        let placeholder = self
            .transcript
            .push_with_tone(Author::Assistant, ANALYZING_TEXT, Tone::Placeholder);
        self.request_scroll();

        self.next_seq += 1;
        let seq = self.next_seq;
        self.in_flight = Some(InFlight { seq, placeholder });
        Some(PendingRequest { seq, text: text.to_owned() })
    }

    /// Render the outcome of request `seq`. Returns `false` (and renders
    /// nothing) when that request was superseded or already resolved.
    pub fn resolve(&mut self, seq: u64, outcome: Result<PredictionResult, String>) -> bool {
        let Some(current) = self.in_flight else {
            return false;
        };
        if current.seq != seq {
            return false;
        }
        self.in_flight = None;
        self.transcript.remove_placeholder(current.placeholder);

        match outcome {
            Ok(result) => {
                for (tone, text) in render_prediction(&result) {
                    self.transcript.push_with_tone(Author::Assistant, text, tone);
                }
            }
            Err(detail) => {
                self.transcript
                    .push_with_tone(Author::Assistant, render_failure(&detail), Tone::Error);
            }
        }
        self.request_scroll();
        true
    }

    /// Whether a request is awaiting its response.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.in_flight.is_some()
    }

    fn request_scroll(&mut self) {
        self.scroll_seq += 1;
    }
}
