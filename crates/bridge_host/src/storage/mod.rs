//! Durable page storage contracts.

pub mod kv;
