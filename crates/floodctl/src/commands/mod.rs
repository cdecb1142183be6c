//! Command modules for floodctl
//!
//! - ask: one question, print the exchange
//! - chat: interactive assistant panel on stdin
//! - suggestions: list the suggested questions
//! - check: validate a knowledge document

pub mod ask;
pub mod chat;
pub mod check;
pub mod suggestions;
