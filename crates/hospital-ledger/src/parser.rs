//! Line-oriented record reader and writer.
//!
//! The data file stores one field per line. Reading never fails: a missing
//! line reads as the empty string, and numeric fields that do not parse fall
//! back to a caller-chosen default.

use std::fmt::Display;
use std::iter::Peekable;
use std::str::Lines;

/// Trait for records stored in the data file.
///
/// A record is a tag line followed by its field lines.
pub trait LedgerRecord: Sized {
    /// Tag line written before this record's fields.
    fn tag(&self) -> &'static str;

    /// Reads the fields that follow `tag`.
    ///
    /// Returns `None` without consuming anything if `tag` does not belong to
    /// this record type.
    fn read_fields(tag: &str, reader: &mut LineReader<'_>) -> Option<Self>;

    /// Writes the field lines (without the tag).
    fn write_fields(&self, out: &mut String);

    /// Writes the tag line followed by the field lines.
    fn write_record(&self, out: &mut String) {
        push_line(out, self.tag());
        self.write_fields(out);
    }
}

/// A streaming reader over the lines of a data file.
///
/// # Example
///
/// ```
/// use hospital_ledger::LineReader;
///
/// let mut reader = LineReader::new("PATIENT\nAlice\n");
/// assert_eq!(reader.next_line(), Some("PATIENT"));
/// assert_eq!(reader.read_or_default(), "Alice");
/// assert_eq!(reader.read_or_default(), "");
/// assert_eq!(reader.next_line(), None);
/// ```
pub struct LineReader<'a> {
    lines: Peekable<Lines<'a>>,
    lines_read: usize,
}

impl<'a> LineReader<'a> {
    /// Creates a reader over `text`. Both `\n` and `\r\n` endings are accepted.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
            lines_read: 0,
        }
    }

    /// Returns the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.lines_read += 1;
        Some(line)
    }

    /// Returns the next line without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.lines.peek().copied()
    }

    /// Returns the next line, or the empty string at end of input.
    pub fn read_or_default(&mut self) -> &'a str {
        self.next_line().unwrap_or("")
    }

    /// Skips up to `count` lines.
    pub fn skip(&mut self, count: usize) {
        for _ in 0..count {
            if self.next_line().is_none() {
                break;
            }
        }
    }

    /// Returns the number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

/// Appends `value` and a newline to `out`.
pub fn push_line(out: &mut String, value: impl Display) {
    out.push_str(&value.to_string());
    out.push('\n');
}

/// Helper functions for read-or-default field parsing.
pub mod parse {
    /// Parses a non-negative count, or returns `default`.
    pub fn count(value: &str, default: usize) -> usize {
        value.trim().parse().unwrap_or(default)
    }

    /// Parses a ROOMS section size.
    ///
    /// Anything that is not an `i32` in `0..=i32::MAX` falls back to `default`.
    pub fn room_count(value: &str, default: usize) -> usize {
        value
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(default)
    }

    /// Parses a room number; anything that is not a non-negative integer is 0.
    pub fn room_number(value: &str) -> u32 {
        value.trim().parse().unwrap_or(0)
    }

    /// Parses a monetary amount, or 0.0.
    pub fn amount(value: &str) -> f64 {
        value.trim().parse().unwrap_or(0.0)
    }

    /// Parses a room flag: only `1` means occupied.
    pub fn flag(value: &str) -> bool {
        value == "1"
    }
}
