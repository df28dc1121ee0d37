//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `storefront` - Read-only store snapshot (products, collections, customer, cart, page)
//! - `lexicon` - Keyword tables and message normalization
//! - `intent` - Intent rules and the ordered classification cascade
//! - `conversation` - Per-session context, collection offers, widget state
//! - `responses` - Reply handlers and the response engine
//! - `proactive` - Proactive prompt wording and gating

pub mod conversation;
pub mod foundation;
pub mod intent;
pub mod lexicon;
pub mod proactive;
pub mod responses;
pub mod storefront;
