//! Sign frequency analysis for transcribed handwriting exports.
//!
//! Reads one plain-text transcription per document folder, counts letters,
//! digits and other signs, compares letter shares against German reference
//! frequencies and writes charts and spreadsheets.

pub mod analysis;
pub mod color;
pub mod data;
pub mod report;

pub use analysis::{run, Analysis, Settings};
