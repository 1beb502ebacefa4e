//! Interactive driver: bootstrap, catalog, optional downloads, then a search prompt loop.

use anyhow::{Context, Result};
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::{catalog, downloader, report, search, storage};

pub const MIN_SEARCH_CHARS: usize = 3;

/// What the user typed at the search prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    Quit,
    TooShort,
    Term(String),
}

impl SearchInput {
    pub fn parse(line: &str) -> Self {
        let term = line.trim();
        if term.is_empty() || term.eq_ignore_ascii_case("quit") {
            SearchInput::Quit
        } else if term.chars().count() < MIN_SEARCH_CHARS {
            SearchInput::TooShort
        } else {
            SearchInput::Term(term.to_string())
        }
    }
}

/// Only an explicit "n" declines; anything else, including an empty answer, accepts.
pub fn is_decline(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}

/// Print `message` and read one line. `None` at end of input.
pub async fn prompt<R>(input: &mut R, message: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).await.context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for names until the user quits, running `on_search` for each accepted term.
pub async fn search_loop<R, F, Fut>(input: &mut R, mut on_search: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    loop {
        let line = match prompt(input, "\nEnter name to search (or 'quit' to exit): ").await? {
            Some(line) => line,
            None => break,
        };

        let term = match SearchInput::parse(&line) {
            SearchInput::Quit => break,
            SearchInput::TooShort => {
                println!("Please enter at least {} characters for search.", MIN_SEARCH_CHARS);
                continue;
            }
            SearchInput::Term(term) => term,
        };

        on_search(term).await?;

        match prompt(input, "\nSearch for another name? (y/n): ").await? {
            Some(answer) if !is_decline(&answer) => {}
            _ => break,
        }
    }
    Ok(())
}

/// Run the whole interactive session against stdin.
pub async fn run(config: Config) -> Result<()> {
    println!("DSE CET Allotment Searcher");
    println!("{}", "=".repeat(30));

    storage::ensure_layout(&config.pdf_dir)?;
    let client = downloader::build_client(&config)?;
    let catalog = Arc::new(catalog::build_catalog(&client, &config).await);
    info!("Catalog ready with {} institutes ({:?})", catalog.len(), catalog.source());

    let mut input = BufReader::new(tokio::io::stdin());

    match prompt(&mut input, "\nDownload PDFs? (y/n, default=y): ").await? {
        Some(answer) if is_decline(&answer) => info!("Downloads skipped by user"),
        Some(_) => {
            downloader::download_all(&client, &config, &catalog).await;
        }
        None => return Ok(()),
    }

    let pdf_dir = config.pdf_dir.clone();
    search_loop(&mut input, |term| {
        let catalog = Arc::clone(&catalog);
        let pdf_dir = pdf_dir.clone();
        async move {
            let needle = term.clone();
            let results = tokio::task::spawn_blocking(move || {
                search::search_all_pdfs(&pdf_dir, &catalog, &needle)
            })
            .await??;
            report::display_results(&results, &term);
            Ok::<(), anyhow::Error>(())
        }
    })
    .await
}
