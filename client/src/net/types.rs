//! Wire DTOs for the prediction endpoint.
//!
//! DESIGN
//! ======
//! The backend is lenient about which fields it fills in, so every response
//! field is optional and empty strings are treated as absent when converting
//! into [`PredictionResult`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::diagnosis::PredictionResult;

/// Body of `POST <predict url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Response body of the prediction endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub alternates: Option<Vec<String>>,
    #[serde(default)]
    pub department: Option<String>,
    /// Symptom features the model detected. Not rendered.
    #[serde(default)]
    pub extracted: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<PredictionResponse> for PredictionResult {
    fn from(resp: PredictionResponse) -> Self {
        Self {
            primary: non_empty(resp.prediction),
            alternates: resp
                .alternates
                .unwrap_or_default()
                .into_iter()
                .filter(|a| !a.trim().is_empty())
                .collect(),
            department: non_empty(resp.department),
            error: non_empty(resp.error),
        }
    }
}
