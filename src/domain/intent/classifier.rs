//! Intent classification over the rule cascade.

use serde::Serialize;
use tracing::debug;

use crate::domain::conversation::ConversationContext;
use crate::domain::lexicon::NormalizedMessage;

use super::rules::{RuleId, RULES};
use super::Intent;

/// Result of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Matching rule, `None` when the message fell through to filler.
    pub rule: Option<RuleId>,
    pub intent: Intent,
}

impl Classification {
    pub fn fallback() -> Self {
        Self {
            rule: None,
            intent: Intent::Filler,
        }
    }

    /// True when the turn answers a pending yes/no question.
    pub fn answers_confirmation(&self) -> bool {
        matches!(self.intent, Intent::Confirmation | Intent::Rejection)
    }
}

/// Runs the cascade and returns the first match.
///
/// Pure: the caller decides what to do with a pending confirmation the
/// message did not answer.
pub fn classify(message: &NormalizedMessage, context: &ConversationContext) -> Classification {
    if message.is_blank() {
        debug!("blank message falls through to filler");
        return Classification::fallback();
    }

    match RULES.iter().find(|rule| rule.matches(message, context)) {
        Some(rule) => {
            debug!(rule = %rule.id, intent = ?rule.intent, "rule matched");
            Classification {
                rule: Some(rule.id),
                intent: rule.intent,
            }
        }
        None => {
            debug!("no rule matched");
            Classification::fallback()
        }
    }
}
