//! Sorted word-list output.

use std::io::{self, Write};

use crate::word_set::WordSet;

/// Write every word on its own line, in byte-wise ascending order, and nothing else.
///
/// ## Returns
/// - The number of lines written.
///
/// ## Errors
/// - Any I/O error from `out`.
pub fn report(words: &WordSet, mut out: impl Write) -> io::Result<usize> {
    let mut lines = 0;
    for word in words {
        writeln!(out, "{word}")?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}

/// Write the `--count` summary line.
pub fn report_count(words: &WordSet, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{} words", words.len())
}
