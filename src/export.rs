//! # export: PDF generation from the preview tree
//!
//! Turns the exact [`Preview`] tree the screen shows into an A4 PDF
//! (210x297mm, zero page margin) using `printpdf` builtin fonts. No zoom is
//! ever applied on export.
//!
//! Export is exclusive per [`PdfExporter`] instance: while one export is in
//! flight the trigger must stay disabled, and a second call fails with
//! [`ExportError::Busy`]. There is no automatic retry; the user re-triggers.

use std::path::Path;

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt, TextItem,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::render::{Preview, Section};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

// Content padding inside the zero-margin page, and the uniform line grid.
// A4 is 841.89pt tall.
const PAGE_HEIGHT_PT: f32 = 841.89;
const PADDING_PT: f32 = 36.0;
const LINE_HEIGHT_PT: f32 = 16.0;
const LINES_PER_PAGE: usize = 48;
const WRAP_COLUMNS: usize = 96;

#[derive(Debug, Error)]
pub enum ExportError {
    /// An export is already running against this render target.
    #[error("an export is already in progress")]
    Busy,

    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy)]
enum LineStyle {
    Name,
    Heading,
    Body,
    Blank,
}

struct Line {
    text: String,
    style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Blank)
    }
}

/// Renders the preview tree to raw PDF bytes. Pure except for the system
/// clock printpdf stamps into document metadata.
pub fn pdf_bytes(preview: &Preview, title: &str) -> Vec<u8> {
    let lines = flatten(preview);
    let pages: Vec<PdfPage> = lines
        .chunks(LINES_PER_PAGE)
        .map(page_from_lines)
        .collect();
    debug!(pages = pages.len(), lines = lines.len(), "laid out PDF");

    let mut warnings = Vec::new();
    PdfDocument::new(title)
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings)
}

fn page_from_lines(lines: &[Line]) -> PdfPage {
    let mut ops = vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(PADDING_PT),
                y: Pt(PAGE_HEIGHT_PT - PADDING_PT),
            },
        },
        Op::SetLineHeight {
            lh: Pt(LINE_HEIGHT_PT),
        },
    ];
    for line in lines {
        let (font, size) = match line.style {
            LineStyle::Name => (BuiltinFont::HelveticaBold, 18.0),
            LineStyle::Heading => (BuiltinFont::HelveticaBold, 13.0),
            LineStyle::Body | LineStyle::Blank => (BuiltinFont::Helvetica, 10.5),
        };
        if !line.text.is_empty() {
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(size),
                font,
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.text.clone())],
                font,
            });
        }
        ops.push(Op::AddLineBreak);
    }
    ops.push(Op::EndTextSection);
    PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops)
}

/// Flattens the tree into styled lines in the fixed section order the
/// renderer already established.
fn flatten(preview: &Preview) -> Vec<Line> {
    let mut lines = Vec::new();
    match preview {
        Preview::Empty(empty) => {
            lines.push(Line::new(&empty.heading, LineStyle::Heading));
            lines.push(Line::new(&empty.hint, LineStyle::Body));
        }
        Preview::Document(view) => {
            lines.push(Line::new(&view.header.name, LineStyle::Name));
            lines.push(Line::new(&view.header.title, LineStyle::Body));
            if !view.header.contacts.is_empty() {
                lines.push(Line::new(view.header.contacts.join("  |  "), LineStyle::Body));
            }
            for section in &view.sections {
                lines.push(Line::blank());
                lines.push(Line::new(section.heading(), LineStyle::Heading));
                flatten_section(section, &mut lines);
            }
        }
    }
    lines
}

fn flatten_section(section: &Section, lines: &mut Vec<Line>) {
    match section {
        Section::Summary { text } => {
            push_wrapped(lines, text);
        }
        Section::Experience { entries } => {
            for entry in entries {
                lines.push(Line::new(
                    format!("{}  ·  {}", entry.position, entry.date_range),
                    LineStyle::Body,
                ));
                lines.push(Line::new(&entry.company, LineStyle::Body));
                push_wrapped(lines, &entry.description);
                lines.push(Line::blank());
            }
        }
        Section::Education { entries } => {
            for entry in entries {
                lines.push(Line::new(
                    format!("{}  ·  {}", entry.school, entry.date_range),
                    LineStyle::Body,
                ));
                lines.push(Line::new(
                    format!("{} · {}", entry.major, entry.degree),
                    LineStyle::Body,
                ));
            }
        }
        Section::Skills { tags } => {
            push_wrapped(lines, &tags.join(", "));
        }
        Section::Projects { entries } => {
            for entry in entries {
                lines.push(Line::new(
                    format!("{}  ·  {}", entry.name, entry.date_range),
                    LineStyle::Body,
                ));
                push_wrapped(lines, &entry.description);
                if !entry.technologies.is_empty() {
                    push_wrapped(lines, &entry.technologies.join(", "));
                }
                lines.push(Line::blank());
            }
        }
    }
}

/// Greedy word wrap on a character-count column; long unbroken words get a
/// line of their own rather than being split.
fn push_wrapped(lines: &mut Vec<Line>, text: &str) {
    let mut current = String::new();
    let mut current_chars = 0usize;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > WRAP_COLUMNS {
            lines.push(Line::new(std::mem::take(&mut current), LineStyle::Body));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }
    if !current.is_empty() {
        lines.push(Line::new(current, LineStyle::Body));
    }
}

/// One exporter per open preview dialog; guards against overlapping exports
/// on the same render target.
pub struct PdfExporter {
    in_flight: bool,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self { in_flight: false }
    }

    pub fn is_exporting(&self) -> bool {
        self.in_flight
    }

    /// Marks an export as started. Callers driving the low-level
    /// [`pdf_bytes`] themselves must pair this with [`PdfExporter::finish`].
    pub fn begin(&mut self) -> Result<(), ExportError> {
        if self.in_flight {
            return Err(ExportError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Renders and writes `<path>` in one go, holding the exclusivity guard
    /// for the duration of the write.
    pub async fn export_to_file(
        &mut self,
        preview: &Preview,
        title: &str,
        path: &Path,
    ) -> Result<(), ExportError> {
        self.begin()?;
        let bytes = pdf_bytes(preview, title);
        let result = tokio::fs::write(path, &bytes).await.map_err(ExportError::Io);
        self.finish();
        match result {
            Ok(()) => {
                info!(path = %path.display(), size = bytes.len(), "exported PDF");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}
