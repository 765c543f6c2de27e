//! gerikit-core
//!
//! Pure domain types shared by the scoring, criteria and note-analysis
//! crates. No I/O; this is the shared vocabulary of the gerikit system.

pub mod error;
pub mod models;
