use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use super::render;
use crate::tools::dispatch::LegalReasoningService;
use crate::tools::schemas::FollowupRequest;

pub(in crate::tools::dispatch) async fn followup(
    service: &LegalReasoningService,
    request: FollowupRequest,
) -> Result<CallToolResult, McpError> {
    Ok(match service.engine().ask_followup(request.into()) {
        Ok(envelope) => render::call_tool_result(envelope),
        Err(err) => render::engine_error(&err),
    })
}
