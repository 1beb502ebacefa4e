//! On-disk layout for allotment PDFs: `<pdf_dir>/<round>/<code>_4.pdf`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::models::Round;

pub const PDF_EXTENSION: &str = ".pdf";

/// Create the root directory and one subdirectory per round. Idempotent.
pub fn ensure_layout(pdf_dir: &Path) -> Result<()> {
    for round in Round::ALL {
        let dir = round_dir(pdf_dir, round);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create PDF directory: {}", dir.display()))?;
    }
    debug!("PDF directory layout ready under {}", pdf_dir.display());
    Ok(())
}

pub fn round_dir(pdf_dir: &Path, round: Round) -> PathBuf {
    pdf_dir.join(round.as_str())
}

pub fn pdf_file_name(code: &str) -> String {
    format!("{}_4{}", code, PDF_EXTENSION)
}

pub fn pdf_path(pdf_dir: &Path, round: Round, code: &str) -> PathBuf {
    round_dir(pdf_dir, round).join(pdf_file_name(code))
}

/// Institution code encoded in a PDF file name (text before the first '_').
pub fn institute_code_from_file_name(file_name: &str) -> &str {
    file_name.split('_').next().unwrap_or(file_name)
}

/// PDF files stored for a round, sorted by file name.
/// A missing round directory yields an empty list.
pub fn list_round_pdfs(pdf_dir: &Path, round: Round) -> Result<Vec<PathBuf>> {
    let dir = round_dir(pdf_dir, round);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Cannot list {}", dir.display()))?;
        let is_pdf = entry.file_name().to_string_lossy().ends_with(PDF_EXTENSION);
        if entry.file_type().is_file() && is_pdf {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
