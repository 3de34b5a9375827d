use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::Analysis;
use crate::data::percentage::ComparisonRow;

pub const SUMMARY_FILE: &str = "summary.json";

/// Machine-readable digest of one analysis run.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub documents: usize,
    pub non_space_chars: u64,
    pub letters: u64,
    pub digits: u64,
    pub other_signs: u64,
    pub distinct_letters: usize,
    pub comparison: &'a [ComparisonRow],
}

impl<'a> Summary<'a> {
    pub fn from_analysis(analysis: &'a Analysis) -> Self {
        let counts = &analysis.counts;
        Summary {
            documents: analysis.corpus.len(),
            non_space_chars: analysis.corpus.non_space_chars(),
            letters: counts.amount_all_letters,
            digits: counts.digits.total(),
            other_signs: counts.others.total(),
            distinct_letters: counts.letters.len(),
            comparison: &analysis.comparison,
        }
    }
}

pub fn write_summary(analysis: &Analysis, path: &Path) -> Result<()> {
    let summary = Summary::from_analysis(analysis);
    let json = serde_json::to_string_pretty(&summary).context("serialising summary")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
