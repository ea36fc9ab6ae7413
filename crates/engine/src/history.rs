use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::domain::LegalDomain;
use crate::error::{EngineError, Result};

/// One stored reasoning step.
///
/// `index` is assigned by the history at append time and is 1-based, strictly
/// increasing, and gapless; steps are never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ReasoningStep {
    pub index: u64,
    pub text: String,
    pub domain: LegalDomain,
    pub declared_total: u64,
    pub continuation_expected: bool,
    pub is_revision: bool,
    pub revises_index: Option<u64>,
    pub references: Vec<String>,
    pub created_at_ms: u64,
}

/// Caller-facing step fields, before the history assigns index and timestamp.
#[derive(Debug, Clone)]
pub struct StepInput {
    pub text: String,
    pub domain: LegalDomain,
    pub declared_total: u64,
    pub continuation_expected: bool,
    pub is_revision: bool,
    pub revises_index: Option<u64>,
    pub references: Vec<String>,
}

/// Append-only, index-addressable log of reasoning steps.
///
/// Interior mutability lets the history live behind an `Arc` shared across
/// concurrently dispatched tool calls; the mutex around the step vector is
/// the single mutual-exclusion boundary, so index assignment never races.
#[derive(Debug, Default)]
pub struct ReasoningHistory {
    steps: Mutex<Vec<ReasoningStep>>,
}

impl ReasoningHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn steps(&self) -> MutexGuard<'_, Vec<ReasoningStep>> {
        self.steps.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a step, assigning the next sequential index.
    ///
    /// When `is_revision` is set, `revises_index` must name an index already
    /// present in the history (necessarily smaller than the one being
    /// assigned); anything else is a validation error and leaves the history
    /// untouched.
    pub fn append(&self, input: StepInput) -> Result<ReasoningStep> {
        let mut steps = self.steps();
        let index = steps.len() as u64 + 1;

        if input.is_revision {
            let revises = input.revises_index.ok_or_else(|| {
                EngineError::validation("isRevision is set but revisesThoughtNumber is missing")
            })?;
            // Indices are contiguous from 1, so existence is a range check.
            if revises == 0 || revises >= index {
                return Err(EngineError::Validation(format!(
                    "revisesThoughtNumber {revises} does not reference an existing step (history length {})",
                    steps.len()
                )));
            }
        }

        let step = ReasoningStep {
            index,
            text: input.text,
            domain: input.domain,
            declared_total: input.declared_total,
            continuation_expected: input.continuation_expected,
            is_revision: input.is_revision,
            revises_index: input.revises_index,
            references: input.references,
            created_at_ms: unix_ms(SystemTime::now()),
        };
        steps.push(step.clone());
        Ok(step)
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }

    pub fn get(&self, index: u64) -> Option<ReasoningStep> {
        if index == 0 {
            return None;
        }
        self.steps().get(index as usize - 1).cloned()
    }
}

fn unix_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(text: &str) -> StepInput {
        StepInput {
            text: text.to_string(),
            domain: LegalDomain::LegalReasoning,
            declared_total: 3,
            continuation_expected: true,
            is_revision: false,
            revises_index: None,
            references: Vec::new(),
        }
    }

    #[test]
    fn append_assigns_sequential_indices() {
        let history = ReasoningHistory::new();
        assert!(history.is_empty());

        let first = history.append(step("first")).unwrap();
        let second = history.append(step("second")).unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(second.index, 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn get_is_index_addressable() {
        let history = ReasoningHistory::new();
        history.append(step("first")).unwrap();
        history.append(step("second")).unwrap();

        assert_eq!(history.get(1).unwrap().text, "first");
        assert_eq!(history.get(2).unwrap().text, "second");
        assert!(history.get(0).is_none());
        assert!(history.get(3).is_none());
    }

    #[test]
    fn revision_must_reference_existing_prior_index() {
        let history = ReasoningHistory::new();
        history.append(step("first")).unwrap();

        let mut revision = step("revised");
        revision.is_revision = true;
        revision.revises_index = Some(1);
        let stored = history.append(revision).unwrap();
        assert_eq!(stored.index, 2);
        assert_eq!(stored.revises_index, Some(1));
    }

    #[test]
    fn revision_of_missing_or_forward_index_fails() {
        let history = ReasoningHistory::new();
        history.append(step("first")).unwrap();

        let mut missing = step("revised");
        missing.is_revision = true;
        missing.revises_index = Some(99);
        assert!(matches!(
            history.append(missing),
            Err(EngineError::Validation(_))
        ));

        // The index about to be assigned is not a legal target either.
        let mut forward = step("revised");
        forward.is_revision = true;
        forward.revises_index = Some(2);
        assert!(matches!(
            history.append(forward),
            Err(EngineError::Validation(_))
        ));

        // Failed appends leave the history untouched.
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn revision_without_target_fails() {
        let history = ReasoningHistory::new();
        let mut revision = step("revised");
        revision.is_revision = true;
        assert!(matches!(
            history.append(revision),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn concurrent_appends_stay_gapless() {
        use std::sync::Arc;

        let history = Arc::new(ReasoningHistory::new());
        let mut handles = Vec::new();
        for worker in 0..8 {
            let history = Arc::clone(&history);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    history
                        .append(step(&format!("worker {worker} step {i}")))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.len(), 200);
        // Indices must be exactly 1..=200 with no reuse.
        for index in 1..=200u64 {
            assert_eq!(history.get(index).unwrap().index, index);
        }
    }
}
