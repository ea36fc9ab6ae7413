//! Cerebra Legal MCP Server
//!
//! Exposes structured legal reasoning tools to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `legal_think` - record one step of legal reasoning (with revision support)
//! - `legal_ask_followup_question` - domain-aware follow-up question with suggested options
//! - `legal_attempt_completion` - present a legal conclusion with domain guidance
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "cerebra-legal": {
//!       "command": "legal-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::LegalReasoningService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Cerebra Legal MCP server");

    let service = LegalReasoningService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Cerebra Legal MCP server stopped");
    Ok(())
}
