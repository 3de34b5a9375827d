use std::path::PathBuf;

use clap::Parser;

use sign_tally::Settings;

/// Count transcribed signs and compare letter usage with German text.
#[derive(Parser, Debug)]
#[command(name = "sign-tally", version, about)]
pub struct Cli {
    /// Export folder with one subfolder per transcribed document
    #[arg(short, long, default_value = "export_job_20571304")]
    pub input: PathBuf,

    /// Where charts and workbooks are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Extension of the transcription files
    #[arg(short, long, default_value = "txt")]
    pub extension: String,

    /// Name of the analysed corpus in the comparison table
    #[arg(long, default_value = "Zuse")]
    pub label: String,

    /// Skip rendering the bar charts
    #[arg(long)]
    pub no_charts: bool,

    /// Also write every table as CSV
    #[arg(long)]
    pub csv: bool,

    /// Also write summary.json
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            extension: self.extension.clone(),
            label: self.label.clone(),
            charts: !self.no_charts,
            csv: self.csv,
            summary: self.summary,
        }
    }
}
