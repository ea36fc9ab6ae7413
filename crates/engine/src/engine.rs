use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{DomainClassifier, LegalDomain};
use crate::error::{EngineError, Result};
use crate::format::{self, Envelope};
use crate::guidance::GuidanceCatalog;
use crate::history::{ReasoningHistory, StepInput};

/// Arguments for the step-recording operation, using the tool's wire names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkInput {
    pub thought: String,
    pub thought_number: u64,
    pub total_thoughts: u64,
    pub next_thought_needed: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub is_revision: bool,
    #[serde(default)]
    pub revises_thought_number: Option<u64>,
    #[serde(default)]
    pub request_guidance: bool,
    #[serde(default)]
    pub request_template: bool,
}

/// Arguments for the follow-up question operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowupInput {
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Arguments for the completion operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInput {
    pub result: String,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Orchestrates classification, history, guidance lookup, and rendering.
///
/// One engine instance is one reasoning session; it accepts calls
/// indefinitely and has no terminal state. The three operations are stateless
/// with respect to each other except through the step history.
#[derive(Debug, Default)]
pub struct ReasoningEngine {
    classifier: DomainClassifier,
    catalog: GuidanceCatalog,
    history: ReasoningHistory,
}

impl ReasoningEngine {
    pub fn new(classifier: DomainClassifier, catalog: GuidanceCatalog) -> Self {
        Self {
            classifier,
            catalog,
            history: ReasoningHistory::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &ReasoningHistory {
        &self.history
    }

    /// Record one reasoning step and acknowledge it.
    pub fn record_step(&self, input: ThinkInput) -> Result<Envelope> {
        if input.thought.trim().is_empty() {
            return Err(EngineError::validation("thought must be a non-empty string"));
        }
        if input.thought_number == 0 {
            return Err(EngineError::validation("thoughtNumber must be at least 1"));
        }
        if input.total_thoughts == 0 {
            return Err(EngineError::validation("totalThoughts must be at least 1"));
        }
        if input.is_revision && input.revises_thought_number.is_none() {
            return Err(EngineError::validation(
                "isRevision is set but revisesThoughtNumber is missing",
            ));
        }

        let domain = self.resolve_domain(input.category.as_deref(), &input.thought)?;

        let step = self.history.append(StepInput {
            text: input.thought,
            domain,
            declared_total: input.total_thoughts,
            continuation_expected: input.next_thought_needed,
            is_revision: input.is_revision,
            revises_index: input.revises_thought_number,
            references: input.references,
        })?;
        log::info!("{}", format::thought_banner(&step));

        let entry = self.catalog.entry(domain);
        let guidance = input.request_guidance.then(|| entry.guidance.as_str());
        let template = input.request_template.then(|| entry.template.as_str());
        format::step_ack(&step, self.history.len(), guidance, template)
    }

    /// Build a follow-up question envelope. Does not touch the history.
    pub fn ask_followup(&self, input: FollowupInput) -> Result<Envelope> {
        if input.question.trim().is_empty() {
            return Err(EngineError::validation("question must be a non-empty string"));
        }

        let domain = self
            .classifier
            .classify(&with_context(&input.question, input.context.as_deref()));
        let options = match input.options {
            Some(options) if !options.is_empty() => options,
            _ => self.catalog.entry(domain).followup_options.clone(),
        };
        format::followup(&input.question, &options, domain)
    }

    /// Build a completion envelope. Does not touch the history.
    pub fn complete(&self, input: CompletionInput) -> Result<Envelope> {
        if input.result.trim().is_empty() {
            return Err(EngineError::validation("result must be a non-empty string"));
        }

        let domain = self
            .classifier
            .classify(&with_context(&input.result, input.context.as_deref()));
        let entry = self.catalog.entry(domain);
        format::completion(
            &input.result,
            domain,
            &entry.guidance,
            input.command.as_deref(),
        )
    }

    /// Name-keyed dispatch over a loosely-typed argument bag.
    ///
    /// Every failure, including an unknown operation name, is rendered as an
    /// error envelope; this entry point never panics and never corrupts the
    /// history.
    pub fn execute(&self, operation: &str, args: serde_json::Value) -> Envelope {
        let outcome = match operation {
            "legal_think" => parse_args(args).and_then(|input| self.record_step(input)),
            "legal_ask_followup_question" => {
                parse_args(args).and_then(|input| self.ask_followup(input))
            }
            "legal_attempt_completion" => parse_args(args).and_then(|input| self.complete(input)),
            other => Err(EngineError::UnknownOperation(other.to_string())),
        };
        outcome.unwrap_or_else(|err| Envelope::error(err.to_string()))
    }

    fn resolve_domain(&self, category: Option<&str>, text: &str) -> Result<LegalDomain> {
        match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => LegalDomain::from_category(category).ok_or_else(|| {
                EngineError::Validation(format!("unknown category '{category}'"))
            }),
            None => Ok(self.classifier.classify(text)),
        }
    }
}

fn with_context(text: &str, context: Option<&str>) -> String {
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!("{text} {context}"),
        None => text.to_string(),
    }
}

fn parse_args<T: DeserializeOwned>(args: serde_json::Value) -> Result<T> {
    serde_json::from_value(args).map_err(|err| EngineError::Validation(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn think(text: &str) -> ThinkInput {
        ThinkInput {
            thought: text.to_string(),
            thought_number: 1,
            total_thoughts: 3,
            next_thought_needed: true,
            category: None,
            references: Vec::new(),
            is_revision: false,
            revises_thought_number: None,
            request_guidance: false,
            request_template: false,
        }
    }

    #[test]
    fn record_step_rejects_empty_thought() {
        let engine = ReasoningEngine::with_defaults();
        let err = engine.record_step(think("  ")).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn record_step_rejects_zero_counters() {
        let engine = ReasoningEngine::with_defaults();

        let mut input = think("valid thought");
        input.thought_number = 0;
        assert!(engine.record_step(input).is_err());

        let mut input = think("valid thought");
        input.total_thoughts = 0;
        assert!(engine.record_step(input).is_err());

        assert!(engine.history().is_empty());
    }

    #[test]
    fn category_override_bypasses_classification() {
        let engine = ReasoningEngine::with_defaults();
        let mut input = think("The tender award criteria violated Law 131/2015");
        input.category = Some("contract_analysis".to_string());

        let envelope = engine.record_step(input).unwrap();
        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert_eq!(payload["detectedDomain"], "contract_analysis");
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        let engine = ReasoningEngine::with_defaults();
        let mut input = think("some thought");
        input.category = Some("maritime_law".to_string());
        assert!(matches!(
            engine.record_step(input),
            Err(EngineError::Validation(_))
        ));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn generic_category_maps_to_default_domain() {
        let engine = ReasoningEngine::with_defaults();
        let mut input = think("The tender award criteria violated Law 131/2015");
        input.category = Some("planning".to_string());

        let envelope = engine.record_step(input).unwrap();
        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert_eq!(payload["detectedDomain"], "legal_reasoning");
    }

    #[test]
    fn request_flags_embed_catalog_text() {
        let engine = ReasoningEngine::with_defaults();
        let mut input = think("The tender award criteria violated Law 131/2015");
        input.request_guidance = true;
        input.request_template = true;

        let envelope = engine.record_step(input).unwrap();
        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert!(payload["guidance"].as_str().unwrap().contains("Law 131/2015"));
        assert!(payload["template"].as_str().unwrap().contains("Contested act"));
    }

    #[test]
    fn followup_defaults_options_from_catalog() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine
            .ask_followup(FollowupInput {
                question: "Was the product warranty honored?".to_string(),
                options: None,
                context: None,
            })
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert_eq!(payload["detectedDomain"], "consumer_protection");
        let options = payload["options"].as_array().unwrap();
        assert!(!options.is_empty());
    }

    #[test]
    fn followup_keeps_caller_options_and_uses_context_for_classification() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine
            .ask_followup(FollowupInput {
                question: "Which remedy do you prefer?".to_string(),
                options: Some(vec!["Annulment".to_string(), "Re-evaluation".to_string()]),
                context: Some("ANSC contestation of a tender".to_string()),
            })
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert_eq!(payload["detectedDomain"], "ansc_contestation");
        assert_eq!(
            payload["options"],
            json!(["Annulment", "Re-evaluation"])
        );
    }

    #[test]
    fn empty_caller_options_fall_back_to_catalog() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine
            .ask_followup(FollowupInput {
                question: "Was the refund processed?".to_string(),
                options: Some(Vec::new()),
                context: None,
            })
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert!(!payload["options"].as_array().unwrap().is_empty());
    }

    #[test]
    fn completion_includes_domain_guidance() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine
            .complete(CompletionInput {
                result: "The clause is void under the Civil Code".to_string(),
                command: None,
                context: None,
            })
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(envelope.text().unwrap()).unwrap();
        assert_eq!(payload["detectedDomain"], "contract_analysis");
        assert!(payload["guidance"].as_str().unwrap().contains("Civil Code"));
    }

    #[test]
    fn readonly_operations_do_not_mutate_history() {
        let engine = ReasoningEngine::with_defaults();
        engine.record_step(think("first thought")).unwrap();
        let before = engine.history().len();

        engine
            .ask_followup(FollowupInput {
                question: "Anything else?".to_string(),
                options: None,
                context: None,
            })
            .unwrap();
        engine
            .complete(CompletionInput {
                result: "Done.".to_string(),
                command: None,
                context: None,
            })
            .unwrap();

        assert_eq!(engine.history().len(), before);
    }

    #[test]
    fn execute_routes_by_operation_name() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine.execute(
            "legal_think",
            json!({
                "thought": "The tender award criteria violated Law 131/2015",
                "thoughtNumber": 1,
                "totalThoughts": 3,
                "nextThoughtNeeded": true
            }),
        );
        assert!(!envelope.is_error);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn execute_maps_malformed_args_to_error_envelope() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine.execute("legal_think", json!({ "thought": "missing counters" }));
        assert!(envelope.is_error);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn execute_rejects_unknown_operations_without_crashing() {
        let engine = ReasoningEngine::with_defaults();
        let envelope = engine.execute("legal_divination", json!({}));
        assert!(envelope.is_error);
        assert!(envelope.text().unwrap().contains("legal_divination"));
    }
}
