use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use super::render;
use crate::tools::dispatch::LegalReasoningService;
use crate::tools::schemas::ThinkRequest;

pub(in crate::tools::dispatch) async fn think(
    service: &LegalReasoningService,
    request: ThinkRequest,
) -> Result<CallToolResult, McpError> {
    Ok(match service.engine().record_step(request.into()) {
        Ok(envelope) => render::call_tool_result(envelope),
        Err(err) => render::engine_error(&err),
    })
}
