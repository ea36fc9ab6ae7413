use legal_engine::CompletionInput;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompletionRequest {
    /// The legal analysis result or conclusion
    #[schemars(description = "The legal analysis result or conclusion")]
    pub result: String,

    /// CLI command to surface alongside the result
    #[schemars(description = "CLI command to demonstrate the result (optional)")]
    pub command: Option<String>,

    /// Extra context folded into domain detection
    #[schemars(description = "Additional context for domain detection (optional)")]
    pub context: Option<String>,
}

impl From<CompletionRequest> for CompletionInput {
    fn from(request: CompletionRequest) -> Self {
        Self {
            result: request.result,
            command: request.command,
            context: request.context,
        }
    }
}
