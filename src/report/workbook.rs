use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::data::model::{SignCounts, Tally};
use crate::data::percentage::{ComparisonRow, Usage};

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("writing workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

type Result<T> = core::result::Result<T, WorkbookError>;

pub const SIGN_COUNTS_FILE: &str = "sign_counts.xlsx";
pub const COMPARISON_FILE: &str = "letter_percentage_comparison.xlsx";

/// Sheet name and key column header for each tally sheet.
const COUNT_SHEETS: [(&str, &str); 3] = [
    ("Letters", "Letter"),
    ("Numbers", "Number"),
    ("Special_signs", "Sign"),
];

// ---------------------------------------------------------------------------
// Raw counts: one sheet per category
// ---------------------------------------------------------------------------

/// Write letters, digits and other signs to three sheets of one workbook.
pub fn write_sign_counts(counts: &SignCounts, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let tallies = [&counts.letters, &counts.digits, &counts.others];
    for ((sheet_name, key_header), tally) in COUNT_SHEETS.iter().zip(tallies) {
        write_tally_sheet(&mut workbook, &header, sheet_name, key_header, tally)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_tally_sheet(
    workbook: &mut Workbook,
    header: &Format,
    sheet_name: &str,
    key_header: &str,
    tally: &Tally,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    sheet.write_string_with_format(0, 0, key_header, header)?;
    sheet.write_string_with_format(0, 1, "Count", header)?;

    for (row, (sign, count)) in (1u32..).zip(tally.iter()) {
        sheet.write_string(row, 0, sign.to_string())?;
        sheet.write_number(row, 1, count as f64)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Percentage comparison
// ---------------------------------------------------------------------------

/// Column headers of the comparison sheet; `label` names the observed corpus.
pub fn comparison_headers(label: &str) -> [String; 4] {
    [
        "Letter".to_string(),
        format!("{label} letter usage"),
        "German letter usage".to_string(),
        "Percentage difference".to_string(),
    ]
}

/// Write the observed-vs-reference table to a single-sheet workbook.
///
/// The sheet starts directly with the `Letter` column; there is no leading
/// row-number column.
pub fn write_comparison(rows: &[ComparisonRow], label: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let percent = Format::new().set_num_format("0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Letter comparison")?;
    for (col, title) in (0u16..).zip(comparison_headers(label)) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (row, r) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, &r.letter)?;
        sheet.write_number_with_format(row, 1, r.observed, &percent)?;
        for (col, cell) in [(2u16, r.reference), (3, r.difference)] {
            match cell {
                Usage::Value(v) => sheet.write_number_with_format(row, col, v, &percent)?,
                Usage::NoData => sheet.write_string(row, col, cell.to_string())?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Corpus;
    use crate::data::percentage::{compare, german_reference, letter_percentages};
    use crate::data::tally::count_signs;

    #[test]
    fn headers_use_corpus_label() {
        let headers = comparison_headers("Zuse");
        assert_eq!(headers[0], "Letter");
        assert_eq!(headers[1], "Zuse letter usage");
        assert_eq!(headers[3], "Percentage difference");
    }

    #[test]
    fn writes_both_workbooks() {
        let tmp = tempfile::tempdir().unwrap();
        let counts = count_signs(&Corpus::from_texts([("A1", "Ääbc 12 ;")]));
        let pct = letter_percentages(&counts.letters, counts.amount_all_letters);
        let rows = compare(&pct, &german_reference());

        let counts_path = tmp.path().join(SIGN_COUNTS_FILE);
        let cmp_path = tmp.path().join(COMPARISON_FILE);
        write_sign_counts(&counts, &counts_path).unwrap();
        write_comparison(&rows, "Zuse", &cmp_path).unwrap();

        assert!(std::fs::metadata(&counts_path).unwrap().len() > 0);
        assert!(std::fs::metadata(&cmp_path).unwrap().len() > 0);
    }
}
