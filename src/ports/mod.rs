//! Ports - interfaces between the concierge domain and the outside world.
//!
//! - `ReplyChooser` - picks among interchangeable filler replies
//! - `StoreDataSource` - loads the storefront snapshot
//! - `PromptPublisher` - delivers proactive prompts to the widget

mod prompt_publisher;
mod reply_chooser;
mod store_data_source;

pub use prompt_publisher::PromptPublisher;
pub use reply_chooser::ReplyChooser;
pub use store_data_source::StoreDataSource;
