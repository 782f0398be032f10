use regex::{Regex, RegexBuilder};

pub const START_MARKER: &str = "<<<<<<< HEAD";
pub const SEPARATOR_MARKER: &str = "=======";
pub const END_MARKER: &str = ">>>>>>>";

/// Matches one well-formed conflict block.
///
/// `ours` and `theirs` are captured without the whitespace around the markers,
/// `eol` is the line ending of the end-marker line, `\n` or `\r\n` (empty at
/// end of input).
pub fn conflict_block_regex() -> Regex {
    let pattern = format!(
        r"{start}\s*(?P<ours>.*?)\s*{sep}\s*(?P<theirs>.*?)\s*{end}[^\r\n]*(?P<eol>\r?\n|$)",
        start = regex::escape(START_MARKER),
        sep = regex::escape(SEPARATOR_MARKER),
        end = regex::escape(END_MARKER),
    );

    RegexBuilder::new(&pattern)
        .dot_matches_new_line(true)
        .build()
        .expect("conflict block pattern is valid")
}
