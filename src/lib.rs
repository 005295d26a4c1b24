//! # Simple Man
//!
//! Renders a roff-style man page source into a single static HTML page.
//! The source is a plain text file of line-oriented directives:
//!
//! ```text
//! .TH msg 1 2024-01-01 site User\ Manual
//! .SH NAME
//! msg - render man pages to HTML
//! .SH SEE ALSO
//! .LN https://example.com Example Site
//! ```
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Parse   source text  →  Page      (directives → document model)
//! 2. Render  Page         →  HTML      (or a plain-text summary with -s)
//! ```
//!
//! The whole source is read into one buffer before parsing starts, and the
//! parsed [`types::Page`] borrows every span from it. Nothing is copied, and
//! the borrow checker guarantees the buffer outlives rendering.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Reads a whole file or stdin into a [`source::SourceBuffer`] |
//! | [`parse`] | Stage 1: classifies lines and builds the page in one pass |
//! | [`title`] | Escape-aware splitter for the five `.TH` fields |
//! | [`types`] | Document model: `Page`, `Section`, `Command`, `TitleFields` |
//! | [`render`] | Stage 2: HTML output using Maud |
//! | [`output`] | Debug summary listing of the parsed page |
//! | [`config`] | Theme settings: stylesheet location, hue angles, TOML loading |
//!
//! # Design Decisions
//!
//! ## Verbatim Content
//!
//! Document text is not HTML-escaped. Authors can use inline tags such as
//! `<b>` directly in text lines, link labels and title fields. The flip side
//! is that only trusted documents should be rendered.
//!
//! ## Fail Before Writing
//!
//! The source and the stylesheet are read, and the page fully parsed, before
//! a single byte goes to stdout. A structural error (text before the first
//! `.SH`) or an unreadable resource aborts the run with nothing written.

pub mod config;
pub mod output;
pub mod parse;
pub mod render;
pub mod source;
pub mod title;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
