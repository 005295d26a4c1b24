//! Plain-text debug summary of a parsed page.
//!
//! An alternate output mode (`-s`) that lists exactly what the parser built,
//! without rendering anything:
//!
//! ```text
//! title: msg
//! section: 1
//! date: 2024-01-01
//! source: site
//! manual-section: My\ Manual
//! SECTION NAME
//!   TEXT msg - render man pages to HTML
//! SECTION SEE ALSO
//!   LINK  http://example.com Example Site
//! ```
//!
//! Command values are printed raw, so a link keeps the leading space that
//! followed its `.LN` token.
//!
//! As elsewhere, [`format_summary`] is pure and returns lines for testing;
//! [`print_summary`] writes them to stdout.

use crate::types::Page;
use std::io::{self, Write};

/// Indentation of command lines under their section.
const COMMAND_INDENT: &str = "  ";

/// Format the summary: title fields by label, then sections and commands in
/// document order.
pub fn format_summary(page: &Page) -> Vec<String> {
    let mut lines: Vec<String> = page
        .title
        .labelled()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();

    for section in &page.sections {
        lines.push(format!("SECTION {}", section.name));
        for command in &section.commands {
            lines.push(format!(
                "{COMMAND_INDENT}{} {}",
                command.tag(),
                command.value()
            ));
        }
    }

    lines
}

/// Write the summary to `out`, one line each.
pub fn write_summary(page: &Page, out: &mut impl Write) -> io::Result<()> {
    for line in format_summary(page) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the summary to stdout.
pub fn print_summary(page: &Page) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(page, &mut out)?;
    out.flush()
}
