use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::loader::load_corpus;
use crate::data::model::{Corpus, SignCategory, SignCounts};
use crate::data::percentage::{
    compare, german_reference, letter_percentages, ComparisonRow, PercentageTable,
};
use crate::data::tally::count_signs;
use crate::report::chart::{render_bar_chart, ChartError, ChartSpec};
use crate::report::csv_export::write_csv_mirrors;
use crate::report::summary::{write_summary, SUMMARY_FILE};
use crate::report::workbook::{write_comparison, write_sign_counts, COMPARISON_FILE, SIGN_COUNTS_FILE};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Everything a run needs to know, independent of how it was configured.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Export root with one subfolder per document.
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    /// Name of the observed corpus in the comparison header.
    pub label: String,
    pub charts: bool,
    pub csv: bool,
    pub summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("export_job_20571304"),
            output_dir: PathBuf::from("."),
            extension: "txt".to_string(),
            label: "Zuse".to_string(),
            charts: true,
            csv: false,
            summary: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis – the complete result of one counting pass
// ---------------------------------------------------------------------------

/// Loaded corpus and everything derived from it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub corpus: Corpus,
    pub counts: SignCounts,
    /// Observed case-folded letter shares.
    pub observed: PercentageTable,
    pub reference: PercentageTable,
    pub comparison: Vec<ComparisonRow>,
}

impl Analysis {
    /// Count, fold and compare. Pure; no I/O.
    pub fn from_corpus(corpus: Corpus) -> Self {
        let counts = count_signs(&corpus);
        let observed = letter_percentages(&counts.letters, counts.amount_all_letters);
        let reference = german_reference();
        let comparison = compare(&observed, &reference);
        Analysis {
            corpus,
            counts,
            observed,
            reference,
            comparison,
        }
    }

    /// Load `settings.input` and analyse it.
    pub fn load(settings: &Settings) -> Result<Self> {
        let corpus = load_corpus(&settings.input, &settings.extension)
            .with_context(|| format!("loading transcriptions from {}", settings.input.display()))?;
        log::info!(
            "loaded {} documents from {}",
            corpus.len(),
            settings.input.display()
        );

        let analysis = Self::from_corpus(corpus);
        let counts = &analysis.counts;
        log::info!(
            "counted {} letters ({} distinct), {} digits, {} other signs",
            counts.amount_all_letters,
            counts.letters.len(),
            counts.digits.total(),
            counts.others.total()
        );
        Ok(analysis)
    }

    /// Write every configured output into `settings.output_dir`.
    ///
    /// Returns the paths written, in order.
    pub fn export(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        let dir = &settings.output_dir;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;

        let mut written = Vec::new();

        if settings.charts {
            written.extend(self.export_charts(dir)?);
        }

        let path = dir.join(SIGN_COUNTS_FILE);
        write_sign_counts(&self.counts, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);

        let path = dir.join(COMPARISON_FILE);
        write_comparison(&self.comparison, &settings.label, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);

        if settings.csv {
            written.extend(write_csv_mirrors(&self.counts, &self.comparison, dir)?);
        }

        if settings.summary {
            let path = dir.join(SUMMARY_FILE);
            write_summary(self, &path)?;
            written.push(path);
        }

        for path in &written {
            log::info!("wrote {}", path.display());
        }
        Ok(written)
    }

    fn export_charts(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for category in SignCategory::ALL {
            let spec = ChartSpec::for_category(category);
            let path = dir.join(spec.file_name);
            match render_bar_chart(self.counts.tally(category), &spec, &path) {
                Ok(()) => written.push(path),
                Err(ChartError::Empty(_)) => {
                    log::warn!("no {category} counted, skipping {}", spec.file_name)
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("rendering {}", path.display()))
                }
            }
        }
        Ok(written)
    }
}

/// Load, analyse and export in one go.
pub fn run(settings: &Settings) -> Result<Analysis> {
    let analysis = Analysis::load(settings)?;
    analysis.export(settings)?;
    Ok(analysis)
}
