//! Wire types exchanged with the analysis backend

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::verdict::{classify, VerdictClass};

/// Kind of input being checked. Only URLs are submitted today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputType {
    Url,
}

/// Body of `POST /api/v1/checks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub input_type: InputType,
    pub raw_input: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl CheckRequest {
    /// Request for an already validated URL
    pub fn url(raw_input: impl Into<String>) -> Self {
        Self {
            input_type: InputType::Url,
            raw_input: raw_input.into(),
            metadata: Map::new(),
        }
    }
}

/// Backend verdict for one check.
///
/// Every field is optional on the wire. `raw_input` is attached on the
/// client after the response arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,

    /// Either 0-1 or 0-100; see [`crate::score::normalize_score`]
    #[serde(
        default,
        deserialize_with = "numeric_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub rule_hits: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub evidence_summary: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_input: Option<String>,
}

impl CheckResult {
    /// Attach the submitted input, and a client timestamp when the backend
    /// did not report one.
    pub fn with_submission(mut self, raw_input: &str, now: DateTime<Utc>) -> Self {
        self.raw_input = Some(raw_input.to_string());
        if self.submitted_at.as_deref().map_or(true, str::is_empty) {
            self.submitted_at = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
        }
        self
    }

    pub fn verdict_class(&self) -> VerdictClass {
        classify(self.verdict.as_deref())
    }

    /// Uppercased verdict token as shown in the history table
    pub fn verdict_token(&self) -> String {
        match self.verdict.as_deref() {
            Some(v) if !v.is_empty() => v.to_uppercase(),
            _ => "UNKNOWN".to_string(),
        }
    }

    /// Human readable reasons: rule hits first, then evidence statements
    pub fn reasons(&self) -> Vec<String> {
        self.rule_hits
            .iter()
            .map(|rule| format!("Regra acionada: {}", rule))
            .chain(
                self.evidence_summary
                    .iter()
                    .map(|evidence| format!("Evidência de IA: {}", evidence)),
            )
            .collect()
    }
}

fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
