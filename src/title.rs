//! Escape-aware splitter for the `.TH` title line.
//!
//! A title line carries up to five space-separated fields:
//!
//! ```text
//! .TH ls 1 2024-01-01 GNU User\ Commands
//!     │  │ │          │   └ manual title
//!     │  │ │          └ source
//!     │  │ └ date
//!     │  └ section number
//!     └ name
//! ```
//!
//! A backslash keeps the following character from acting as a delimiter, so
//! `User\ Commands` is one field. The backslash itself is kept in the field
//! text. Anything past the fifth field is dropped.
//!
//! Each new field starts *at* the delimiter that ended the previous one and
//! relies on the left-trim to drop it. For runs of spaces this means every
//! extra space yields an empty field: `a  b` splits into `a`, ``, `b`.

use crate::types::{TITLE_FIELDS, TitleFields};

/// Split the remainder of a `.TH` line into the five title fields.
///
/// `line` must already have the directive token and leading whitespace
/// stripped. Unfilled fields are empty.
///
/// - `"ls 1 2024 GNU Manual"` → `["ls", "1", "2024", "GNU", "Manual"]`
/// - `"My\ Title 1"` → `["My\ Title", "1", "", "", ""]`
/// - `"a b c d e f g"` → `["a", "b", "c", "d", "e"]`
pub fn split_title_fields(line: &str) -> TitleFields<'_> {
    let mut fields = [""; TITLE_FIELDS];
    let mut filled = 0;
    let mut start = 0;
    let mut escape = false;

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if filled == TITLE_FIELDS {
            break;
        }

        let delimiter = !escape && c == ' ';
        if delimiter || chars.peek().is_none() {
            let end = if delimiter { i } else { line.len() };
            fields[filled] = line[start..end].trim_start();
            filled += 1;
            start = i;
            continue;
        }

        escape = c == '\\';
    }

    TitleFields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_plain_fields() {
        let t = split_title_fields("ls 1 2024-01-01 GNU Manual");
        assert_eq!(t.0, ["ls", "1", "2024-01-01", "GNU", "Manual"]);
    }

    #[test]
    fn escaped_space_keeps_one_field_and_the_backslash() {
        let t = split_title_fields(r"My\ Title 1 2024-01-01 Source Manual");
        assert_eq!(t.name(), r"My\ Title");
        assert_eq!(t.section_number(), "1");
        assert_eq!(t.date(), "2024-01-01");
        assert_eq!(t.source(), "Source");
        assert_eq!(t.manual_title(), "Manual");
    }

    #[test]
    fn escaped_space_in_last_field() {
        let t = split_title_fields(r"msg 7 2023 site User\ Manual");
        assert_eq!(t.manual_title(), r"User\ Manual");
    }

    #[test]
    fn fewer_tokens_leave_empty_fields() {
        let t = split_title_fields("msg 1");
        assert_eq!(t.0, ["msg", "1", "", "", ""]);
    }

    #[test]
    fn empty_line_has_no_fields() {
        assert_eq!(split_title_fields("").0, [""; TITLE_FIELDS]);
    }

    #[test]
    fn single_character_line() {
        assert_eq!(split_title_fields("x").0, ["x", "", "", "", ""]);
    }

    #[test]
    fn overflow_is_discarded() {
        let t = split_title_fields("a b c d e f g");
        assert_eq!(t.0, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn last_field_does_not_swallow_the_rest() {
        // Splitting stops at five fields, the tail is dropped, not appended.
        let t = split_title_fields("a b c d Manual Title");
        assert_eq!(t.manual_title(), "Manual");
    }

    #[test]
    fn consecutive_spaces_yield_empty_fields() {
        let t = split_title_fields("a  b");
        assert_eq!(t.0, ["a", "", "b", "", ""]);
    }

    #[test]
    fn trailing_space_does_not_open_a_field() {
        let t = split_title_fields("a b ");
        assert_eq!(t.0, ["a", "b", "", "", ""]);
    }

    #[test]
    fn escaped_backslash_still_escapes_the_next_space() {
        // The escape flag is re-armed by every backslash, escaped or not.
        let t = split_title_fields(r"a\\ b c");
        assert_eq!(t.0, [r"a\\ b", "c", "", "", ""]);
    }

    #[test]
    fn escape_only_covers_one_character() {
        let t = split_title_fields(r"\x y");
        assert_eq!(t.0, [r"\x", "y", "", "", ""]);
    }

    #[test]
    fn tabs_are_not_delimiters() {
        let t = split_title_fields("a\tb c");
        assert_eq!(t.0, ["a\tb", "c", "", "", ""]);
    }

    #[test]
    fn multibyte_text_is_kept_intact() {
        let t = split_title_fields("café 1 été");
        assert_eq!(t.0, ["café", "1", "été", "", ""]);
    }
}
