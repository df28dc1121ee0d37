//! PromptPublisher implementations.

mod channel;
mod in_memory;

pub use channel::ChannelPromptPublisher;
pub use in_memory::InMemoryPromptPublisher;
