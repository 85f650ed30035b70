// src/generation/mod.rs
//! Calls to the external text-completion service and recovery of the
//! structured payload embedded in its free-text replies.

pub mod client;
pub mod sanitize;

pub use client::GenerationClient;
pub use sanitize::extract_json_payload;
