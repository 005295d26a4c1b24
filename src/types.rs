//! Document model shared by the parser, the renderer and the summary.
//!
//! Every text span borrows from the single source buffer the page was parsed
//! from. The `'src` lifetime keeps that buffer alive until rendering is done;
//! nothing here owns or copies document text.

use serde::Serialize;

/// Number of fields declared by a `.TH` title directive.
pub const TITLE_FIELDS: usize = 5;

/// Fixed labels used when listing the title fields, in field order.
pub const TITLE_LABELS: [&str; TITLE_FIELDS] =
    ["title", "section", "date", "source", "manual-section"];

/// The whole parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'src> {
    /// Path or stream name the document was read from.
    pub source: &'src str,
    pub title: TitleFields<'src>,
    pub sections: Vec<Section<'src>>,
}

impl<'src> Page<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            title: TitleFields::default(),
            sections: Vec::new(),
        }
    }

    /// The section commands are currently appended to (the last one opened).
    pub fn current_section_mut(&mut self) -> Option<&mut Section<'src>> {
        self.sections.last_mut()
    }
}

/// The five metadata values of a `.TH` line.
///
/// Always exactly five slots; slots the title line did not fill are empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleFields<'src>(pub [&'src str; TITLE_FIELDS]);

impl<'src> TitleFields<'src> {
    /// Page name, e.g. `ls`.
    pub fn name(&self) -> &'src str {
        self.0[0]
    }

    /// Manual section number, e.g. `1`.
    pub fn section_number(&self) -> &'src str {
        self.0[1]
    }

    pub fn date(&self) -> &'src str {
        self.0[2]
    }

    pub fn source(&self) -> &'src str {
        self.0[3]
    }

    /// Display title, used both as `<title>` and as the main heading.
    pub fn manual_title(&self) -> &'src str {
        self.0[4]
    }

    /// `(label, value)` pairs in field order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &'src str)> + '_ {
        TITLE_LABELS.iter().copied().zip(self.0.iter().copied())
    }
}

/// A named, ordered group of commands opened by `.SH`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'src> {
    pub name: &'src str,
    pub commands: Vec<Command<'src>>,
}

impl<'src> Section<'src> {
    pub fn new(name: &'src str) -> Self {
        Self {
            name,
            commands: Vec::new(),
        }
    }
}

/// One content unit inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Command<'src> {
    /// A literal content line, emitted verbatim.
    Text(&'src str),
    /// Raw `.LN` remainder; split into href and label only when rendered.
    Link(&'src str),
}

impl<'src> Command<'src> {
    /// Variant tag shown in the debug summary.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Text(_) => "TEXT",
            Command::Link(_) => "LINK",
        }
    }

    pub fn value(&self) -> &'src str {
        match self {
            Command::Text(value) | Command::Link(value) => value,
        }
    }
}
