use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use super::render;
use crate::tools::dispatch::LegalReasoningService;
use crate::tools::schemas::CompletionRequest;

pub(in crate::tools::dispatch) async fn completion(
    service: &LegalReasoningService,
    request: CompletionRequest,
) -> Result<CallToolResult, McpError> {
    Ok(match service.engine().complete(request.into()) {
        Ok(envelope) => render::call_tool_result(envelope),
        Err(err) => render::engine_error(&err),
    })
}
