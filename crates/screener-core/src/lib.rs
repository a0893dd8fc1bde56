//! screener-core
//!
//! Pure domain types for questionnaire screening: answer keys and values,
//! response sets, lifecycle status, validation error maps, and the request
//! and report documents exchanged with callers. No scoring logic lives here.

pub mod error;
pub mod models;
