// Resume analysis: PDF text extraction, keyword matching, scoring.
// Handlers depend on the `ResumeAnalyzer` trait, never on a concrete backend.

pub mod extract;
pub mod handlers;
pub mod matching;
pub mod scoring;
