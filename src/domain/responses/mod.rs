//! Response handlers.
//!
//! One module per handler family. Handlers read the snapshot, may update
//! the conversation context and return the reply text with light markup.

pub mod confirmation;
mod engine;
pub mod filler;
pub mod markup;
pub mod page_questions;
mod policy;
pub mod sale;
pub mod search;
pub mod social;
pub mod store_info;
pub mod tracking;

pub use engine::{ResponseEngine, Turn};
pub use policy::{DeliveryWindow, StorePolicy};
