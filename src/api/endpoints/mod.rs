//! API endpoint handlers — one module per task.
//!
//! The structured handlers share one shape: decode input, build the
//! task prompt, call the model, sanitize + decode the reply into the
//! task's record. Chat threads session history instead of decoding.

pub mod analysis;
pub mod briefing;
pub mod chat;
pub mod forecast;
pub mod health;
pub mod scenario;
