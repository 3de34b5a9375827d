use std::fmt;

use serde::{Serialize, Serializer};

use super::model::Tally;

/// Placeholder shown where the reference table has no value for a letter.
pub const NO_DATA: &str = "-";

/// Relative letter frequencies in German text, in percent.
/// Source: <https://de.wikipedia.org/wiki/Buchstabenh%C3%A4ufigkeit>
const GERMAN_LETTER_FREQUENCIES: [(&str, f64); 27] = [
    ("e", 17.40),
    ("n", 9.78),
    ("i", 7.55),
    ("s", 7.27),
    ("r", 7.00),
    ("a", 6.51),
    ("t", 6.15),
    ("d", 5.08),
    ("h", 4.76),
    ("u", 4.35),
    ("l", 3.44),
    ("c", 3.06),
    ("g", 3.01),
    ("m", 2.53),
    ("o", 2.51),
    ("b", 1.89),
    ("w", 1.89),
    ("f", 1.66),
    ("k", 1.21),
    ("z", 1.13),
    ("p", 0.79),
    ("v", 0.67),
    ("ß", 0.31),
    ("j", 0.27),
    ("y", 0.04),
    ("x", 0.03),
    ("q", 0.02),
];

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// PercentageTable
// ---------------------------------------------------------------------------

/// Lowercase letter → share in percent, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentageTable {
    rows: Vec<(String, f64)>,
}

impl PercentageTable {
    pub fn get(&self, letter: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|(l, _)| l == letter)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|(l, p)| (l.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.rows.iter().map(|(_, p)| p).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PercentageTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        PercentageTable {
            rows: iter.into_iter().map(|(l, p)| (l.into(), p)).collect(),
        }
    }
}

/// Fold `letters` case-insensitively and express each letter as a percentage
/// of `total_letters`, rounded to two decimals.
///
/// Folded letters appear in the order their first variant appears in
/// `letters`, so a count-sorted tally yields a roughly count-sorted table.
pub fn letter_percentages(letters: &Tally, total_letters: u64) -> PercentageTable {
    if total_letters == 0 {
        return PercentageTable::default();
    }

    let mut folded: Vec<(String, u64)> = Vec::new();
    for (letter, count) in letters.iter() {
        let lower: String = letter.to_lowercase().collect();
        match folded.iter_mut().find(|(l, _)| *l == lower) {
            Some((_, n)) => *n += count,
            None => folded.push((lower, count)),
        }
    }

    folded
        .into_iter()
        .map(|(l, n)| (l, round2(n as f64 / total_letters as f64 * 100.0)))
        .collect()
}

/// The fixed German reference table.
pub fn german_reference() -> PercentageTable {
    GERMAN_LETTER_FREQUENCIES.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// A percentage cell that may have no reference data behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Usage {
    Value(f64),
    NoData,
}

impl Usage {
    pub fn value(self) -> Option<f64> {
        match self {
            Usage::Value(v) => Some(v),
            Usage::NoData => None,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Value(v) => write!(f, "{v:.2}"),
            Usage::NoData => f.write_str(NO_DATA),
        }
    }
}

impl Serialize for Usage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Usage::Value(v) => serializer.serialize_f64(*v),
            Usage::NoData => serializer.serialize_str(NO_DATA),
        }
    }
}

/// One line of the observed-vs-reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub letter: String,
    pub observed: f64,
    pub reference: Usage,
    /// `reference - observed`, rounded to two decimals.
    pub difference: Usage,
}

/// Line up every observed letter with the reference table.
pub fn compare(observed: &PercentageTable, reference: &PercentageTable) -> Vec<ComparisonRow> {
    observed
        .iter()
        .map(|(letter, pct)| {
            let (reference, difference) = match reference.get(letter) {
                Some(r) => (Usage::Value(r), Usage::Value(round2(r - pct))),
                None => (Usage::NoData, Usage::NoData),
            };
            ComparisonRow {
                letter: letter.to_string(),
                observed: pct,
                reference,
                difference,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(text: &str) -> Tally {
        let mut t = Tally::new();
        for c in text.chars() {
            t.increment(c);
        }
        t.sort_descending();
        t
    }

    #[test]
    fn folds_case_for_example_text() {
        let letters = tally("ABba");
        let pct = letter_percentages(&letters, 4);
        assert_eq!(pct.len(), 2);
        assert_eq!(pct.get("a"), Some(50.0));
        assert_eq!(pct.get("b"), Some(50.0));
        assert_eq!(pct.get("A"), None);
    }

    #[test]
    fn percentages_sum_to_about_hundred() {
        let letters = tally("TheQuickBrownFoxJumpsOverTheLazyDogÄöüß");
        let pct = letter_percentages(&letters, letters.total());
        assert!((pct.sum() - 100.0).abs() < 0.01 * pct.len() as f64);
    }

    #[test]
    fn no_letters_gives_empty_table() {
        assert!(letter_percentages(&Tally::new(), 0).is_empty());
    }

    #[test]
    fn reference_has_27_entries_with_eszett() {
        let german = german_reference();
        assert_eq!(german.len(), 27);
        assert_eq!(german.get("ß"), Some(0.31));
        assert_eq!(german.get("e"), Some(17.40));
        assert!((german.sum() - 100.0).abs() < 1.0);
    }

    #[test]
    fn compare_uses_sentinel_for_unknown_letters() {
        let observed: PercentageTable = [("e", 20.0), ("ä", 1.25), ("q", 0.02)]
            .into_iter()
            .collect();
        let rows = compare(&observed, &german_reference());

        assert_eq!(rows[0].letter, "e");
        assert_eq!(rows[0].reference, Usage::Value(17.40));
        assert_eq!(rows[0].difference, Usage::Value(-2.6));

        assert_eq!(rows[1].reference, Usage::NoData);
        assert_eq!(rows[1].difference, Usage::NoData);
        assert_eq!(rows[1].difference.to_string(), NO_DATA);

        assert_eq!(rows[2].difference, Usage::Value(0.0));
    }
}
