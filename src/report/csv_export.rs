use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::{SignCounts, Tally};
use crate::data::percentage::ComparisonRow;

#[derive(Serialize)]
struct CountRecord {
    sign: char,
    count: u64,
}

/// Write the three tallies and the comparison table as CSV files into `dir`.
///
/// Returns the paths written.
pub fn write_csv_mirrors(
    counts: &SignCounts,
    rows: &[ComparisonRow],
    dir: &Path,
) -> Result<Vec<std::path::PathBuf>> {
    let mut written = Vec::new();

    for (name, tally) in [
        ("letters.csv", &counts.letters),
        ("numbers.csv", &counts.digits),
        ("special_signs.csv", &counts.others),
    ] {
        let path = dir.join(name);
        write_tally(tally, &path).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }

    let path = dir.join("letter_percentage_comparison.csv");
    write_comparison(rows, &path).with_context(|| format!("writing {}", path.display()))?;
    written.push(path);

    Ok(written)
}

fn write_tally(tally: &Tally, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (sign, count) in tally.iter() {
        writer.serialize(CountRecord { sign, count })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_comparison(rows: &[ComparisonRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Corpus;
    use crate::data::percentage::{compare, german_reference, letter_percentages};
    use crate::data::tally::count_signs;

    #[test]
    fn mirrors_use_sentinel_for_missing_reference() {
        let tmp = tempfile::tempdir().unwrap();
        let counts = count_signs(&Corpus::from_texts([("A1", "eeä 7,")]));
        let pct = letter_percentages(&counts.letters, counts.amount_all_letters);
        let rows = compare(&pct, &german_reference());

        let written = write_csv_mirrors(&counts, &rows, tmp.path()).unwrap();
        assert_eq!(written.len(), 4);

        let letters = std::fs::read_to_string(tmp.path().join("letters.csv")).unwrap();
        assert_eq!(letters, "sign,count\ne,2\nä,1\n");

        let cmp = std::fs::read_to_string(&written[3]).unwrap();
        let mut lines = cmp.lines();
        assert_eq!(lines.next(), Some("letter,observed,reference,difference"));
        assert_eq!(lines.next(), Some("e,66.67,17.4,-49.27"));
        assert_eq!(lines.next(), Some("ä,33.33,-,-"));
    }
}
