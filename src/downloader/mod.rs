use anyhow::Result;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{Catalog, DownloadOutcome, DownloadReport, DownloadSummary, DownloadTask, Round};

pub mod pdf;

pub use pdf::{download_pdf, pdf_url};

const FAILURE_MESSAGE_CHARS: usize = 50;

/// HTTP client shared by the catalog scrape and all downloads
pub fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.http.user_agent)
        .timeout(config.http_timeout())
        .build()?;
    Ok(client)
}

/// Every (code, round) pair, ascending by code, cap1 before cap2.
pub fn download_tasks(catalog: &Catalog) -> Vec<DownloadTask> {
    catalog
        .sorted_codes()
        .into_iter()
        .flat_map(|code| {
            Round::ALL.into_iter().map(move |round| DownloadTask {
                code: code.to_string(),
                round,
            })
        })
        .collect()
}

/// Fetch every missing PDF with at most `config.max_workers` requests in flight.
/// Individual failures are reported and counted; they never stop the batch.
pub async fn download_all(client: &Client, config: &Config, catalog: &Catalog) -> DownloadSummary {
    println!("Starting PDF downloads...");

    let tasks = download_tasks(catalog);
    info!(
        "Queued {} downloads with {} workers",
        tasks.len(),
        config.max_workers
    );

    let mut reports = stream::iter(tasks)
        .map(|task| download_pdf(client, config, task))
        .buffer_unordered(config.max_workers.max(1));

    let mut summary = DownloadSummary::default();
    while let Some(report) = reports.next().await {
        print_report(&report);
        summary.record(&report.outcome);
    }

    println!("\nDownload Summary:");
    println!("Successful downloads: {}", summary.downloaded);
    println!("Already existed: {}", summary.already_exists);
    println!("Failed downloads: {}", summary.failed);
    info!(
        "Downloads finished: {} new, {} present, {} failed",
        summary.downloaded, summary.already_exists, summary.failed
    );

    summary
}

fn print_report(report: &DownloadReport) {
    let label = report.task.round.label();
    match &report.outcome {
        DownloadOutcome::Downloaded => println!("✓ Downloaded {}: {}", label, report.task.code),
        DownloadOutcome::AlreadyExists => {}
        // Most institutes have no list for a round; 404s are only counted.
        DownloadOutcome::Failed(e) if e.is_not_found() => {}
        DownloadOutcome::Failed(e) => {
            warn!("Download of {} failed: {}", report.path.display(), e);
            println!(
                "✗ Failed {}: {} - {}",
                label,
                report.task.code,
                e.short_message(FAILURE_MESSAGE_CHARS)
            );
        }
    }
}
