//! In-memory prompt publisher for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::proactive::{ProactivePrompt, PromptKind};
use crate::ports::PromptPublisher;

/// Captures every published prompt for assertions.
#[derive(Debug, Default)]
pub struct InMemoryPromptPublisher {
    published: RwLock<Vec<ProactivePrompt>>,
}

impl InMemoryPromptPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all published prompts in order.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn published(&self) -> Vec<ProactivePrompt> {
        self.published
            .read()
            .expect("InMemoryPromptPublisher: published lock poisoned")
            .clone()
    }

    pub fn count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryPromptPublisher: published lock poisoned")
            .len()
    }

    pub fn count_of(&self, kind: PromptKind) -> usize {
        self.published
            .read()
            .expect("InMemoryPromptPublisher: published lock poisoned")
            .iter()
            .filter(|p| p.kind == kind)
            .count()
    }

    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryPromptPublisher: published lock poisoned")
            .clear();
    }
}

#[async_trait]
impl PromptPublisher for InMemoryPromptPublisher {
    async fn publish(&self, prompt: ProactivePrompt) -> Result<(), DomainError> {
        self.published
            .write()
            .expect("InMemoryPromptPublisher: published lock poisoned")
            .push(prompt);
        Ok(())
    }
}
