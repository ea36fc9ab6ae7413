//! MCP tool dispatch for Cerebra Legal.
//!
//! One long-lived reasoning session per process, shared across all tool
//! calls; the engine serializes its own history mutations.

mod router;

use std::sync::Arc;

use legal_engine::ReasoningEngine;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use super::catalog;
use super::schemas::{CompletionRequest, FollowupRequest, ThinkRequest};

/// Cerebra Legal MCP Service
#[derive(Clone)]
pub struct LegalReasoningService {
    /// Shared reasoning session (per-process)
    engine: Arc<ReasoningEngine>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl LegalReasoningService {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(ReasoningEngine::with_defaults()),
            tool_router: Self::tool_router(),
        }
    }

    pub(super) fn engine(&self) -> &ReasoningEngine {
        &self.engine
    }
}

impl Default for LegalReasoningService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for LegalReasoningService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl LegalReasoningService {
    /// Record one step of legal reasoning
    #[tool(
        description = "A powerful tool for structured legal reasoning. Records one revisable thought, detects the legal domain (ANSC contestations, consumer protection, contract analysis), and can return domain guidance and templates."
    )]
    pub async fn legal_think(
        &self,
        Parameters(request): Parameters<ThinkRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::think::think(self, request).await
    }

    /// Ask a follow-up question in a legal context
    #[tool(
        description = "Ask the user a follow-up question in a legal context. Detects the legal domain from the question and supplies domain-appropriate answer options when none are given."
    )]
    pub async fn legal_ask_followup_question(
        &self,
        Parameters(request): Parameters<FollowupRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::followup::followup(self, request).await
    }

    /// Present a legal analysis result
    #[tool(
        description = "Present the final legal analysis result or conclusion. Detects the legal domain and attaches the domain's guidance reference."
    )]
    pub async fn legal_attempt_completion(
        &self,
        Parameters(request): Parameters<CompletionRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::completion::completion(self, request).await
    }
}
