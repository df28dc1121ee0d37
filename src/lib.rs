//! Storefront Concierge - rule-based shopping assistant
//!
//! This crate answers storefront visitors with a deterministic intent
//! cascade over a read-only snapshot of the store: greetings, product and
//! collection questions, keyword search, sales, order tracking and store
//! policies, plus proactive prompts chosen from the page the visitor is on.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
