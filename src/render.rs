//! Report formatting: one histogram line per ranked entry.

use std::io::Write;

use crate::frequency::FrequencyEntry;

const BAR: &str = "=";

/// `"<word> | <count '='s> (<count>)"`
pub fn render(entry: &FrequencyEntry) -> String {
    debug_assert!(entry.count >= 1, "entry {:?} was never recorded", entry.word);
    let bar = BAR.repeat(entry.count as usize);
    format!("{} | {} ({})", entry.word, bar, entry.count)
}

/// Write one formatted, newline-terminated line per entry, in order.
pub fn write_lines<W, F>(out: &mut W, entries: &[FrequencyEntry], format: F) -> std::io::Result<()>
where
    W: Write,
    F: Fn(&FrequencyEntry) -> String,
{
    for entry in entries {
        writeln!(out, "{}", format(entry))?;
    }
    Ok(())
}
