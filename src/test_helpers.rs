//! Shared test utilities for the simple-man test suite.
//!
//! Provides a sample document plus lookup helpers and extractors that work
//! on the parsed model (`Page`, `Section`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let page = parse_page("index.1", SAMPLE_PAGE).unwrap();
//! let section = find_section(&page, "SEE ALSO");
//! assert_eq!(command_values(section), vec![" http://example.com Example Site"]);
//! ```

use crate::types::{Page, Section};

/// A small but complete document: title, three sections, inline markup, a
/// blank line, an unknown directive and a link.
pub const SAMPLE_PAGE: &str = r#".TH msg 1 2024-01-01 site My\ Manual
.SH NAME
msg - render man pages to HTML
.SH DESCRIPTION
Reads a <b>roff</b>-style source.

Writes HTML.
.\" not a directive this renderer knows
.SH SEE ALSO
.LN http://example.com Example Site
"#;

// =========================================================================
// Page lookups: panic with a clear message on miss
// =========================================================================

/// Find a section by name. Panics if not found.
pub fn find_section<'p, 'src>(page: &'p Page<'src>, name: &str) -> &'p Section<'src> {
    page.sections
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| {
            let names = section_names(page);
            panic!("section '{name}' not found. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All section names in document order.
pub fn section_names<'src>(page: &Page<'src>) -> Vec<&'src str> {
    page.sections.iter().map(|s| s.name).collect()
}

/// Raw values of every command in a section, in order.
pub fn command_values<'src>(section: &Section<'src>) -> Vec<&'src str> {
    section.commands.iter().map(|c| c.value()).collect()
}
