use legal_engine::{ContentBlock, EngineError, Envelope};
use rmcp::model::{CallToolResult, Content};

/// Map the engine's transport-neutral envelope onto rmcp's result type.
///
/// The JSON payload inside the text block is mirrored into
/// `structured_content` so batch-style clients get a machine-readable copy.
pub(in crate::tools::dispatch) fn call_tool_result(envelope: Envelope) -> CallToolResult {
    let structured = envelope
        .text()
        .and_then(|text| serde_json::from_str(text).ok());

    let content: Vec<Content> = envelope
        .content
        .into_iter()
        .map(|ContentBlock::Text { text }| Content::text(text))
        .collect();

    let mut result = if envelope.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    };
    result.structured_content = structured;
    result
}

pub(in crate::tools::dispatch) fn engine_error(error: &EngineError) -> CallToolResult {
    call_tool_result(Envelope::error(error.to_string()))
}
