//! # enumkit
//!
//! Library half of the enumkit binary. Exposes the CLI so that commands can
//! be driven from integration tests with an in-memory writer.

pub mod cli;
