//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `chooser` - Reply selection (seeded RNG, fixed index)
//! - `prompts` - Proactive prompt delivery (channel, in-memory)
//! - `storefront` - Store snapshot loading (JSON file)

pub mod chooser;
pub mod prompts;
pub mod storefront;

pub use chooser::{FixedReplyChooser, RandomReplyChooser};
pub use prompts::{ChannelPromptPublisher, InMemoryPromptPublisher};
pub use storefront::JsonFileSnapshotSource;
