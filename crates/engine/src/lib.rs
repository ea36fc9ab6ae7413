//! # Legal Engine
//!
//! Stateful reasoning-session engine behind the Cerebra legal tools.
//!
//! ## Features
//!
//! - **Domain classification** - ordered keyword rules over free text
//! - **Reasoning history** - append-only step log with revision linkage
//! - **Guidance catalog** - per-domain guidance, templates, follow-up options
//! - **Envelope rendering** - fixed-shape structured output for the transport
//!
//! ## Architecture
//!
//! ```text
//! tool arguments
//!     │
//!     ├──> ReasoningEngine (record_step / ask_followup / complete)
//!     │      ├─ DomainClassifier (first-match rule table)
//!     │      ├─ ReasoningHistory (serialized append, 1-based indices)
//!     │      └─ GuidanceCatalog (domain → guidance/template/options)
//!     │
//!     └──> Envelope (text content block with JSON payload)
//! ```
//!
//! The engine is synchronous and self-contained; the MCP transport lives in
//! the `legal-mcp` crate and talks to it through [`ReasoningEngine`].

mod domain;
mod engine;
mod error;
mod format;
mod guidance;
mod history;

pub use domain::{default_rule_table, DomainClassifier, DomainRule, LegalDomain};
pub use engine::{CompletionInput, FollowupInput, ReasoningEngine, ThinkInput};
pub use error::{EngineError, Result};
pub use format::{ContentBlock, Envelope};
pub use guidance::{GuidanceCatalog, GuidanceEntry};
pub use history::{ReasoningHistory, ReasoningStep, StepInput};
