//! Command handlers.

mod start_session;

pub use start_session::{StartSessionCommand, StartSessionHandler};
