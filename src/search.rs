use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::models::{Catalog, Round, SearchHit, SearchResults};
use crate::reader;
use crate::storage;

/// Scan every stored PDF of both rounds for `needle`.
pub fn search_all_pdfs(pdf_dir: &Path, catalog: &Catalog, needle: &str) -> Result<SearchResults> {
    println!("\nSearching for '{}' in all PDFs...", needle);

    let mut results = SearchResults::default();
    for round in Round::ALL {
        if !storage::round_dir(pdf_dir, round).is_dir() {
            continue;
        }

        let pdf_files = storage::list_round_pdfs(pdf_dir, round)?;
        println!("Searching {} {} PDFs...", pdf_files.len(), round.label());

        for pdf_path in pdf_files {
            let pdf_file = match pdf_path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let institute_code = storage::institute_code_from_file_name(&pdf_file).to_string();

            let matched = reader::search_pdf(&pdf_path, needle);
            if !matched.found {
                continue;
            }

            let college_name = catalog.college_name(&institute_code);
            println!("✓ Found in {}: {} - {}", round.label(), institute_code, college_name);
            results.push(round, SearchHit {
                institute_code,
                college_name,
                pdf_file,
                context: matched.context,
            });
        }
    }

    info!("Search for '{}' matched {} PDFs", needle, results.total());
    Ok(results)
}
