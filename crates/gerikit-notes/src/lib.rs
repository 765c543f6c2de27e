//! gerikit-notes
//!
//! Free-text clinical note analysis: recognize medication mentions in
//! Latin or Hebrew script, pull out a few vital signs, and run the result
//! through a fixed advisory decision table.

pub mod analyzer;
pub mod recognize;
pub mod rules;
pub mod vitals;

use gerikit_criteria::ReferenceTables;

pub use analyzer::{NoteAnalysis, NoteAnalyzer};

/// Analyze a note against the bundled reference tables.
pub fn analyze_note(text: &str) -> NoteAnalysis {
    NoteAnalyzer::new(ReferenceTables::bundled()).analyze(text)
}
