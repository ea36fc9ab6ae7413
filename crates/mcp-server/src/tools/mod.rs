//! Cerebra Legal MCP tool surface.
//!
//! Split into submodules to keep the catalog, request schemas, and dispatch
//! reviewable separately.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::LegalReasoningService;
