//! Application layer - sessions and proactive prompt orchestration.
//!
//! Coordinates the pure domain (classification, replies, prompt gating)
//! with the ports that load store data and deliver prompts.

mod chat_session;
mod errors;
pub mod handlers;
mod proactive_service;

pub use chat_session::ChatSession;
pub use errors::SessionError;
pub use handlers::{StartSessionCommand, StartSessionHandler};
pub use proactive_service::ProactiveService;
