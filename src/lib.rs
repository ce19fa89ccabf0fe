//! College Buddy: a keyword-routed campus assistant.
//!
//! Answers student questions about study groups, teachers, clubs,
//! transport, alumni and contacts from a fixed, ordered rule table.
//! No model calls, no persistence.
//!
//! See `DESIGN.md` for the module map.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod health;
pub mod logging;
pub mod serve;
pub mod session;
