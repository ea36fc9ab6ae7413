use legal_engine::ThinkInput;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThinkRequest {
    /// The main legal reasoning content
    #[schemars(description = "The main legal reasoning content")]
    pub thought: String,

    /// Caller-visible step number (1-based)
    #[schemars(description = "Current thought number (minimum 1)")]
    pub thought_number: u64,

    /// Caller's estimate of total steps; advisory and revisable
    #[schemars(description = "Estimated total thoughts needed (minimum 1)")]
    pub total_thoughts: u64,

    /// Whether more steps will follow
    #[schemars(description = "Whether another thought is needed after this one")]
    pub next_thought_needed: bool,

    /// Optional category override; auto-detected from the thought when absent.
    #[schemars(
        description = "Category of legal reasoning: 'ansc_contestation', 'consumer_protection', 'contract_analysis', 'legal_reasoning', 'analysis', 'planning', or 'verification' (optional, auto-detected if not provided)"
    )]
    pub category: Option<String>,

    /// Legal references attached to this step
    #[serde(default)]
    #[schemars(description = "References such as statutes or case citations (optional)")]
    pub references: Vec<String>,

    /// Marks this step as a revision of an earlier one
    #[serde(default)]
    #[schemars(description = "Whether this thought revises a previous one (optional)")]
    pub is_revision: bool,

    /// Index of the step being revised; required when isRevision is true
    #[schemars(description = "The thought number being revised")]
    pub revises_thought_number: Option<u64>,

    /// Embed the domain's guidance text in the acknowledgment
    #[serde(default)]
    #[schemars(description = "Request domain-specific guidance")]
    pub request_guidance: bool,

    /// Embed the domain's analysis template in the acknowledgment
    #[serde(default)]
    #[schemars(description = "Request a domain-specific analysis template")]
    pub request_template: bool,
}

impl From<ThinkRequest> for ThinkInput {
    fn from(request: ThinkRequest) -> Self {
        Self {
            thought: request.thought,
            thought_number: request.thought_number,
            total_thoughts: request.total_thoughts,
            next_thought_needed: request.next_thought_needed,
            category: request.category,
            references: request.references,
            is_revision: request.is_revision,
            revises_thought_number: request.revises_thought_number,
            request_guidance: request.request_guidance,
            request_template: request.request_template,
        }
    }
}
