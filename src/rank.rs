//! Ordering of frequency entries into a ranked list.

use std::cmp::Ordering;

use crate::frequency::FrequencyEntry;

/// Count descending, then word ascending so equal counts come out in a fixed order.
pub fn by_count_desc(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Stable sort of `entries` with an arbitrary comparator.
pub fn rank_by<F>(mut entries: Vec<FrequencyEntry>, compare: F) -> Vec<FrequencyEntry>
where
    F: FnMut(&FrequencyEntry, &FrequencyEntry) -> Ordering,
{
    entries.sort_by(compare);
    entries
}

/// Rank entries by count descending.
pub fn rank(entries: Vec<FrequencyEntry>) -> Vec<FrequencyEntry> {
    rank_by(entries, by_count_desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::tokenize;

    fn table_for(text: &str) -> FrequencyTable {
        text.lines().flat_map(tokenize).collect()
    }

    #[test]
    fn highest_count_first() {
        let ranked = rank(table_for("The cat sat on the mat. The cat ran.").entries());
        assert_eq!(ranked[0], FrequencyEntry::new("the", 3));
        assert_eq!(ranked[1], FrequencyEntry::new("cat", 2));
        assert_eq!(ranked.len(), 6);
    }

    #[test]
    fn adjacent_counts_never_increase() {
        let text = "a b c a b a d e f g a b c d\nz y x z y z z q q q q q";
        let ranked = rank(table_for(text).entries());
        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count, "{pair:?}");
        }
    }

    #[test]
    fn equal_counts_ordered_alphabetically() {
        // Pins the chosen tie-break: word ascending among equal counts.
        let ranked = rank(table_for("pear apple fig apple pear fig kiwi").entries());
        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "fig", "pear", "kiwi"]);
    }

    #[test]
    fn reranking_is_stable() {
        let table = table_for("one two three two three three four four four four");
        let first = rank(table.entries());
        let second = rank(table.entries());
        assert_eq!(first, second);
        assert_eq!(rank(first.clone()), first);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn custom_comparator() {
        let entries = vec![
            FrequencyEntry::new("b", 1),
            FrequencyEntry::new("a", 5),
            FrequencyEntry::new("c", 3),
        ];
        let ranked = rank_by(entries, |a, b| a.word.cmp(&b.word));
        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
