//! StartSessionHandler - loads the store snapshot and opens a chat session.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::application::{ChatSession, SessionError};
use crate::domain::responses::ResponseEngine;
use crate::ports::StoreDataSource;

/// Command to start a chat session for the current page view.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    pub thinking_delay: Duration,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    source: Arc<dyn StoreDataSource>,
    engine: ResponseEngine,
}

impl StartSessionHandler {
    pub fn new(source: Arc<dyn StoreDataSource>, engine: ResponseEngine) -> Self {
        Self { source, engine }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<ChatSession, SessionError> {
        let snapshot = self.source.load().await.map_err(|e| {
            warn!(error = %e, "cannot start session");
            SessionError::from(e)
        })?;

        Ok(ChatSession::new(snapshot, self.engine.clone()).with_thinking_delay(cmd.thinking_delay))
    }
}
