//! Plain text extraction from DOCX containers

use crate::error::ExtractorError;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// File extension of the only supported container format
pub const DOCX_EXTENSION: &str = "docx";

/// Extract the text of a DOCX document held in memory
///
/// Every top-level body paragraph contributes its text followed by `\n`,
/// in document order. Empty paragraphs contribute only the newline. Paragraphs
/// inside tables are not body paragraphs and are skipped.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractorError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        warn!("Failed to decode DOCX container ({} bytes): {}", bytes.len(), e);
        ExtractorError::from(e)
    })?;

    let mut text = String::new();
    let mut paragraphs = 0usize;
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            push_paragraph_text(paragraph, &mut text);
            text.push('\n');
            paragraphs += 1;
        }
    }

    debug!("Decoded {} paragraphs, {} chars", paragraphs, text.chars().count());
    Ok(text)
}

/// Extract the text of a DOCX document from a stream
///
/// The stream is read to the end first; the output is identical to
/// [`extract_text`] over the same bytes.
pub fn extract_text_from_reader<R: Read>(mut reader: R) -> Result<String, ExtractorError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    extract_text(&buffer)
}

/// Extract the text of a DOCX file on disk
pub fn extract_text_from_path(path: impl AsRef<Path>) -> Result<String, ExtractorError> {
    let path = path.as_ref();
    if !is_docx_path(path) {
        return Err(ExtractorError::UnsupportedFormat(format!(
            "Only DOCX files are supported: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    extract_text(&bytes)
}

/// Check the file extension, ignoring case
pub fn is_docx_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCX_EXTENSION))
}

fn push_paragraph_text(paragraph: &Paragraph, out: &mut String) {
    push_children_text(&paragraph.children, out);
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            // Hyperlink text is part of the paragraph
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

/// Build a DOCX document with one single-run paragraph per entry
#[cfg(test)]
pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Run};

    let mut docx = Docx::new();
    for text in paragraphs {
        let paragraph = if text.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(*text))
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("pack docx fixture");
    buffer.into_inner()
}
