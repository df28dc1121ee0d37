//! Clarifying replies for messages nothing else recognized.

use crate::ports::ReplyChooser;

pub const FILLER_REPLIES: [&str; 5] = [
    "That's a great question! Let me help you with that. Can you tell me more about what you're looking for?",
    "I'd be happy to assist you! Could you provide a bit more detail so I can give you the best answer?",
    "Thanks for reaching out! I'm here to make your shopping experience amazing. What can I help you find?",
    "I want to make sure I give you the perfect answer. Could you tell me more about what you need?",
    "Great question! I'm here to help with anything related to our products, shipping, returns, or finding the perfect item for you.",
];

pub fn filler(chooser: &dyn ReplyChooser) -> &'static str {
    FILLER_REPLIES[chooser.choose(FILLER_REPLIES.len()) % FILLER_REPLIES.len()]
}
