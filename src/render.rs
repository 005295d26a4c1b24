//! HTML rendering.
//!
//! Stage 2 of the pipeline. Walks a parsed [`Page`] and produces one complete
//! HTML document with [maud](https://maud.lambda.xyz/).
//!
//! ## Layout
//!
//! ```text
//! <head>    title = manual title, generated hue CSS, embedded stylesheet
//! header    name (section) / <h1> manual title / name (section)
//! section   one per .SH: <h2> name, then its commands in order
//! footer    source / date / source
//! ```
//!
//! The repeated header and footer lines mirror the layout of a printed man
//! page, where the same identification appears in both corners.
//!
//! ## No Escaping
//!
//! Unlike maud's default, document text is spliced in with [`PreEscaped`]:
//! source documents may carry inline markup and are passed through untouched.
//! Only trusted documents should be rendered.

use crate::config::{self, ThemeConfig};
use crate::types::{Command, Page, Section, TitleFields};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Render a page into a complete HTML document.
///
/// `stylesheet` is the theme asset contents, embedded verbatim after the
/// generated hue properties. The output depends only on the arguments.
pub fn render_page(page: &Page, theme: &ThemeConfig, stylesheet: &str) -> Markup {
    let fields = &page.title;

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (PreEscaped(fields.manual_title())) }
                style { (PreEscaped(config::generate_hue_css(&theme.hues))) }
                style { (PreEscaped(stylesheet)) }
            }
            body {
                (page_header(fields))
                main {
                    @for section in &page.sections {
                        (render_section(section))
                    }
                }
                (page_footer(fields))
            }
        }
    }
}

/// `name (section)` identification line.
fn ident_line(fields: &TitleFields) -> Markup {
    html! {
        span.ident {
            (PreEscaped(fields.name())) " (" (PreEscaped(fields.section_number())) ")"
        }
    }
}

fn page_header(fields: &TitleFields) -> Markup {
    html! {
        header.page-header {
            (ident_line(fields))
            h1 { (PreEscaped(fields.manual_title())) }
            (ident_line(fields))
        }
    }
}

fn page_footer(fields: &TitleFields) -> Markup {
    html! {
        footer.page-footer {
            span.source { (PreEscaped(fields.source())) }
            span.date { (PreEscaped(fields.date())) }
            span.source { (PreEscaped(fields.source())) }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    html! {
        section {
            h2 { (PreEscaped(section.name)) }
            @for command in &section.commands {
                (render_command(command))
            }
        }
    }
}

/// Render one command.
///
/// Blank text lines become a double line break, the only way a source
/// document can ask for vertical space.
fn render_command(command: &Command) -> Markup {
    match command {
        Command::Text(text) if text.trim().is_empty() => html! { br; br; },
        Command::Text(text) => html! { (PreEscaped(*text)) "\n" },
        Command::Link(raw) => {
            let (href, label) = split_link(raw);
            let label = if label.is_empty() { href } else { label };
            html! { a href=(PreEscaped(href)) { (PreEscaped(label)) } "\n" }
        }
    }
}

/// Split a raw link on its first whitespace run into `(href, label)`.
///
/// Both parts are trimmed. A link without whitespace is all href.
pub fn split_link(raw: &str) -> (&str, &str) {
    let raw = raw.trim();
    match raw.split_once(char::is_whitespace) {
        Some((href, label)) => (href, label.trim()),
        None => (raw, ""),
    }
}

// ============================================================================
// Tests
// ============================================================================
