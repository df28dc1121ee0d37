//! ReplyChooser implementations.

mod fixed;
mod random;

pub use fixed::FixedReplyChooser;
pub use random::RandomReplyChooser;
