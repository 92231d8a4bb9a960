//! Line to word tokenization: trim, lowercase, split on a fixed delimiter set.

/// Characters that separate words. Runs of them yield empty pieces, which are dropped.
pub const DELIMITERS: [char; 17] = [
    ' ', ',', '.', ';', ':', '—', '"', '“', '”', '{', '}', '(', ')', '?', '!', '|', '`',
];

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Split one line into lowercase words, in left-to-right order.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .split(is_delimiter)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
