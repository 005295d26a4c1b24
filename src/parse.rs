//! Directive parsing.
//!
//! Stage 1 of the pipeline. Turns the source text into a [`Page`] in a single
//! forward pass over its lines.
//!
//! ## Grammar
//!
//! ```text
//! .TH name section date source manual-title   title fields (see crate::title)
//! .SH NAME                                     open a new section
//! .LN https://example.com Example Site         link in the current section
//! .XX anything                                 unknown directive: warning, skipped
//! any other line                               literal text in the current section
//! ```
//!
//! Text and links need an open section. Content before the first `.SH` is a
//! structural error and aborts the parse.

use crate::title::split_title_fields;
use crate::types::{Command, Page, Section};
use log::{debug, warn};
use thiserror::Error;

const DIRECTIVE_PREFIX: char = '.';
const TITLE_DIRECTIVE: &str = ".TH";
const SECTION_DIRECTIVE: &str = ".SH";
const LINK_DIRECTIVE: &str = ".LN";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{document}:{line}: text before any section header; add a .SH line first")]
    TextBeforeSection { document: String, line: usize },
    #[error("{document}:{line}: link before any section header; add a .SH line first")]
    LinkBeforeSection { document: String, line: usize },
}

impl ParseError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Classification of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'src> {
    /// `.TH` remainder, leading whitespace removed.
    Title(&'src str),
    /// `.SH` remainder, leading whitespace removed.
    Section(&'src str),
    /// `.LN` remainder, untouched.
    Link(&'src str),
    /// Any other line starting with `.`, kept whole for the warning.
    Unknown(&'src str),
    /// Everything else, kept whole.
    Text(&'src str),
}

/// Classify a single line. Directive tokens are matched as plain prefixes.
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(TITLE_DIRECTIVE) {
        Line::Title(rest.trim_start())
    } else if let Some(rest) = line.strip_prefix(SECTION_DIRECTIVE) {
        Line::Section(rest.trim_start())
    } else if let Some(rest) = line.strip_prefix(LINK_DIRECTIVE) {
        Line::Link(rest)
    } else if line.starts_with(DIRECTIVE_PREFIX) {
        Line::Unknown(line)
    } else {
        Line::Text(line)
    }
}

/// Parse a whole document.
///
/// `document` identifies the source in diagnostics and is stored on the page.
/// Lines are split on `\n` only; a missing final newline is fine and a
/// trailing one does not add an empty line.
pub fn parse_page<'src>(document: &'src str, text: &'src str) -> Result<Page<'src>, ParseError> {
    let mut page = Page::new(document);

    for (index, raw) in text.split_terminator('\n').enumerate() {
        let line_number = index + 1;
        match classify_line(raw) {
            Line::Title(rest) => {
                page.title = split_title_fields(rest);
            }
            Line::Section(name) => {
                debug!("{document}:{line_number}: section {name}");
                page.sections.push(Section::new(name));
            }
            Line::Link(rest) => {
                let Some(section) = page.current_section_mut() else {
                    return Err(ParseError::LinkBeforeSection {
                        document: document.to_string(),
                        line: line_number,
                    });
                };
                section.commands.push(Command::Link(rest));
            }
            Line::Unknown(line) => {
                warn!("{document}:{line_number}: unrecognized directive: {line}");
            }
            Line::Text(line) => {
                let Some(section) = page.current_section_mut() else {
                    return Err(ParseError::TextBeforeSection {
                        document: document.to_string(),
                        line: line_number,
                    });
                };
                section.commands.push(Command::Text(line));
            }
        }
    }

    Ok(page)
}
