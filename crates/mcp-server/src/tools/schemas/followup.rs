use legal_engine::FollowupInput;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FollowupRequest {
    /// The legal question to put to the user
    #[schemars(description = "The legal question to ask the user")]
    pub question: String,

    /// Suggested answer options; domain defaults are used when absent or empty
    #[schemars(description = "Suggested answer options (optional; domain defaults are used when omitted)")]
    pub options: Option<Vec<String>>,

    /// Extra context folded into domain detection
    #[schemars(description = "Additional context for domain detection (optional)")]
    pub context: Option<String>,
}

impl From<FollowupRequest> for FollowupInput {
    fn from(request: FollowupRequest) -> Self {
        Self {
            question: request.question,
            options: request.options,
            context: request.context,
        }
    }
}
