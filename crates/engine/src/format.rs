//! Envelope rendering for engine outputs.
//!
//! Every operation returns the same fixed shape: a list of typed content
//! blocks (currently one text block holding a pretty-printed JSON payload)
//! plus an error flag. The transport layer maps this 1:1 onto its own result
//! type without inspecting the payload.

use serde::{Deserialize, Serialize};

use crate::domain::LegalDomain;
use crate::error::Result;
use crate::history::ReasoningStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Fixed-shape output wrapper returned to the calling transport.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Envelope {
    fn json<T: Serialize>(payload: &T, is_error: bool) -> Result<Self> {
        let text = serde_json::to_string_pretty(payload)?;
        Ok(Self {
            content: vec![ContentBlock::Text { text }],
            is_error,
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        let payload = serde_json::json!({ "error": message.into(), "status": "failed" });
        let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
        Self {
            content: vec![ContentBlock::Text { text }],
            is_error: true,
        }
    }

    /// The text of the first (and currently only) content block.
    pub fn text(&self) -> Option<&str> {
        self.content.first().map(|ContentBlock::Text { text }| text.as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepAckPayload<'a> {
    thought_number: u64,
    total_thoughts: u64,
    next_thought_needed: bool,
    detected_domain: LegalDomain,
    thought_history_length: usize,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    references: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    guidance: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FollowupPayload<'a> {
    question: &'a str,
    options: &'a [String],
    detected_domain: LegalDomain,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionPayload<'a> {
    result: &'a str,
    detected_domain: LegalDomain,
    guidance: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
}

/// Acknowledge a recorded step.
///
/// Surfaces the history-assigned index as the caller-visible step number,
/// alongside the caller's declared total and continuation flag.
pub(crate) fn step_ack(
    step: &ReasoningStep,
    history_len: usize,
    guidance: Option<&str>,
    template: Option<&str>,
) -> Result<Envelope> {
    Envelope::json(
        &StepAckPayload {
            thought_number: step.index,
            total_thoughts: step.declared_total,
            next_thought_needed: step.continuation_expected,
            detected_domain: step.domain,
            thought_history_length: history_len,
            references: &step.references,
            guidance,
            template,
        },
        false,
    )
}

pub(crate) fn followup(
    question: &str,
    options: &[String],
    domain: LegalDomain,
) -> Result<Envelope> {
    Envelope::json(
        &FollowupPayload {
            question,
            options,
            detected_domain: domain,
        },
        false,
    )
}

pub(crate) fn completion(
    result: &str,
    domain: LegalDomain,
    guidance: &str,
    command: Option<&str>,
) -> Result<Envelope> {
    Envelope::json(
        &CompletionPayload {
            result,
            detected_domain: domain,
            guidance,
            command,
        },
        false,
    )
}

/// One-line human-readable header for the step log.
pub(crate) fn thought_banner(step: &ReasoningStep) -> String {
    let revision = if step.is_revision { " (Revision)" } else { "" };
    format!(
        "{}{} {}/{}: {}",
        step.domain.label(),
        revision,
        step.index,
        step.declared_total,
        step.text
    )
}
