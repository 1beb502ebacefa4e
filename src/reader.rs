//! PDF text extraction and case-insensitive name matching

use lopdf::Document;
use std::path::Path;
use tracing::debug;

use crate::errors::DseError;
use crate::models::PdfMatch;

/// Maximum number of matching lines kept as context.
pub const MAX_CONTEXT_LINES: usize = 3;

/// Extract the text of every page in order, one '\n' after each page.
pub fn extract_pdf_text(path: &Path) -> Result<String, DseError> {
    let document = Document::load(path)?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number])?;
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text)
}

/// Trimmed, non-blank lines containing `needle` (case-insensitive), first
/// [`MAX_CONTEXT_LINES`] only. `None` when the text does not contain it at all.
pub fn find_matches(text: &str, needle: &str) -> Option<Vec<String>> {
    let needle = needle.to_lowercase();
    if !text.to_lowercase().contains(&needle) {
        return None;
    }

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.to_lowercase().contains(&needle))
        .take(MAX_CONTEXT_LINES)
        .map(str::to_string)
        .collect();
    Some(lines)
}

/// Search one PDF. Unreadable files come back as not found, with the error
/// as the only context line.
pub fn search_pdf(path: &Path, needle: &str) -> PdfMatch {
    match extract_pdf_text(path) {
        Ok(text) => match find_matches(&text, needle) {
            Some(context) => PdfMatch { found: true, context },
            None => PdfMatch::default(),
        },
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            PdfMatch {
                found: false,
                context: vec![format!("Error reading PDF: {}", e)],
            }
        }
    }
}
