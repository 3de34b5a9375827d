use super::model::{Corpus, SignCategory, SignCounts};

// ---------------------------------------------------------------------------
// Counting pass
// ---------------------------------------------------------------------------

/// Count every non-space sign of the corpus into letters, digits and others.
///
/// Only U+0020 is removed before counting; tabs and other whitespace land in
/// the "other" bucket. Each tally comes back sorted by descending count.
pub fn count_signs(corpus: &Corpus) -> SignCounts {
    let mut counts = SignCounts::default();

    for text in corpus.texts() {
        for sign in text.chars().filter(|&c| c != ' ') {
            match SignCategory::of(sign) {
                SignCategory::Letter => {
                    counts.amount_all_letters += 1;
                    counts.letters.increment(sign);
                }
                SignCategory::Digit => counts.digits.increment(sign),
                SignCategory::Other => counts.others.increment(sign),
            }
        }
    }

    counts.letters.sort_descending();
    counts.digits.sort_descending();
    counts.others.sort_descending();
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Tally;

    fn is_descending(t: &Tally) -> bool {
        t.entries().windows(2).all(|w| w[0].1 >= w[1].1)
    }

    #[test]
    fn splits_example_into_buckets() {
        let corpus = Corpus::from_texts([("A1", "ABba 12")]);
        let counts = count_signs(&corpus);

        assert_eq!(counts.amount_all_letters, 4);
        assert_eq!(counts.letters.len(), 4);
        assert_eq!(counts.letters.get('A'), 1);
        assert_eq!(counts.letters.get('b'), 1);
        assert_eq!(counts.digits.entries(), &[('1', 1), ('2', 1)]);
        assert!(counts.others.is_empty());
    }

    #[test]
    fn totals_match_non_space_chars() {
        let corpus = Corpus::from_texts([
            ("A1", "Der 3. Mai, 1941: Z3 läuft!"),
            ("A2", "Plankalkül (1945) — §12\tß"),
        ]);
        let counts = count_signs(&corpus);
        assert_eq!(counts.total(), corpus.non_space_chars());
        assert_eq!(counts.amount_all_letters, counts.letters.total());
        assert_eq!(counts.others.get('\t'), 1);
        assert_eq!(counts.others.get(' '), 0);
    }

    #[test]
    fn tallies_are_sorted_descending() {
        let corpus = Corpus::from_texts([("x", "aaabbc 1122233 ..,,,;")]);
        let counts = count_signs(&corpus);
        for category in SignCategory::ALL {
            assert!(is_descending(counts.tally(category)), "{category}");
        }
        assert_eq!(counts.letters.entries()[0], ('a', 3));
        assert_eq!(counts.digits.entries()[0], ('2', 3));
        assert_eq!(counts.others.entries()[0], (',', 3));
    }
}
