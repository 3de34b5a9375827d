use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Document – one transcription
// ---------------------------------------------------------------------------

/// A single transcribed document with line breaks already removed.
#[derive(Debug, Clone)]
pub struct Document {
    /// Identifier taken from the file name (text before the first `.`).
    pub key: String,
    /// Full text content.
    pub text: String,
    /// Where the text was read from.
    pub source: PathBuf,
}

// ---------------------------------------------------------------------------
// Corpus – all loaded documents
// ---------------------------------------------------------------------------

/// All documents of one export, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: BTreeMap<String, Document>,
}

impl Corpus {
    /// Build a corpus from `(key, text)` pairs. Used for in-memory input.
    pub fn from_texts<I, K, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Corpus::default();
        for (key, text) in texts {
            let key = key.into();
            corpus.insert(Document {
                source: PathBuf::from(&key),
                key,
                text: text.into(),
            });
        }
        corpus
    }

    /// Insert a document, returning the one it replaced (same key).
    pub fn insert(&mut self, doc: Document) -> Option<Document> {
        self.documents.insert(doc.key.clone(), doc)
    }

    /// Iterate document texts in key order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.documents.values().map(|d| d.text.as_str())
    }

    /// Number of non-space characters over all documents.
    pub fn non_space_chars(&self) -> u64 {
        self.texts()
            .map(|t| t.chars().filter(|&c| c != ' ').count() as u64)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SignCategory
// ---------------------------------------------------------------------------

/// Bucket a character is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignCategory {
    Letter,
    Digit,
    Other,
}

impl SignCategory {
    pub const ALL: [SignCategory; 3] = [Self::Letter, Self::Digit, Self::Other];

    /// Classify a single (non-space) character.
    ///
    /// Letter numbers such as `Ⅷ` are both alphabetic and numeric and count as
    /// other signs, as do vulgar fractions. Superscript and circled digits
    /// count as digits.
    pub fn of(sign: char) -> Self {
        match (sign.is_alphabetic(), sign.is_numeric()) {
            (true, false) => SignCategory::Letter,
            (false, true) if !is_vulgar_fraction(sign) => SignCategory::Digit,
            _ => SignCategory::Other,
        }
    }
}

fn is_vulgar_fraction(sign: char) -> bool {
    matches!(sign, '\u{BC}'..='\u{BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}')
}

impl fmt::Display for SignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignCategory::Letter => write!(f, "letters"),
            SignCategory::Digit => write!(f, "digits"),
            SignCategory::Other => write!(f, "other signs"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tally – sign → count, ordered
// ---------------------------------------------------------------------------

/// Occurrence counts per character.
///
/// Entries keep first-seen order until [`Tally::sort_descending`] is called,
/// which reorders them by count with a stable sort so ties stay in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    entries: Vec<(char, u64)>,
    index: HashMap<char, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `sign`.
    pub fn increment(&mut self, sign: char) {
        match self.index.get(&sign) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(sign, self.entries.len());
                self.entries.push((sign, 1));
            }
        }
    }

    /// Count for `sign`, zero if never seen.
    pub fn get(&self, sign: char) -> u64 {
        self.index
            .get(&sign)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct signs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(char, u64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Highest single count, zero for an empty tally.
    pub fn max_count(&self) -> u64 {
        self.entries.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Reorder by descending count (stable) and rebuild the index.
    pub fn sort_descending(&mut self) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (c, _))| (*c, i))
            .collect();
    }
}

// ---------------------------------------------------------------------------
// SignCounts – the three tallies
// ---------------------------------------------------------------------------

/// Result of one counting pass over a corpus.
#[derive(Debug, Clone, Default)]
pub struct SignCounts {
    pub letters: Tally,
    pub digits: Tally,
    pub others: Tally,
    /// Denominator for letter percentages; always equals `letters.total()`.
    pub amount_all_letters: u64,
}

impl SignCounts {
    pub fn tally(&self, category: SignCategory) -> &Tally {
        match category {
            SignCategory::Letter => &self.letters,
            SignCategory::Digit => &self.digits,
            SignCategory::Other => &self.others,
        }
    }

    /// Total number of counted signs across all categories.
    pub fn total(&self) -> u64 {
        self.letters.total() + self.digits.total() + self.others.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_unicode_signs() {
        assert_eq!(SignCategory::of('ß'), SignCategory::Letter);
        assert_eq!(SignCategory::of('Ä'), SignCategory::Letter);
        assert_eq!(SignCategory::of('7'), SignCategory::Digit);
        assert_eq!(SignCategory::of('.'), SignCategory::Other);
        assert_eq!(SignCategory::of('§'), SignCategory::Other);
    }

    #[test]
    fn classifies_numeric_edge_cases() {
        let classes: Vec<SignCategory> = "İiⅧ²½".chars().map(SignCategory::of).collect();
        assert_eq!(
            classes,
            [
                SignCategory::Letter,
                SignCategory::Letter,
                SignCategory::Other,
                SignCategory::Digit,
                SignCategory::Other,
            ]
        );
        assert_eq!(SignCategory::of('①'), SignCategory::Digit);
        assert_eq!(SignCategory::of('٣'), SignCategory::Digit);
    }

    #[test]
    fn tally_keeps_first_seen_order_on_ties() {
        let mut t = Tally::new();
        for c in "xyzzy".chars() {
            t.increment(c);
        }
        t.sort_descending();
        assert_eq!(t.entries(), &[('y', 2), ('z', 2), ('x', 1)]);
        assert_eq!(t.get('z'), 2);
        assert_eq!(t.get('q'), 0);
        assert_eq!(t.total(), 5);
        assert_eq!(t.max_count(), 2);
    }

    #[test]
    fn tally_increment_after_sort_uses_new_index() {
        let mut t = Tally::new();
        t.increment('a');
        t.increment('b');
        t.increment('b');
        t.sort_descending();
        t.increment('a');
        assert_eq!(t.get('a'), 2);
        assert_eq!(t.get('b'), 2);
    }

    #[test]
    fn corpus_counts_non_space_chars() {
        let corpus = Corpus::from_texts([("A1", "ab c"), ("A2", " 1 ")]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.non_space_chars(), 4);
    }
}
