//! Single allotment PDF fetch

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::DseError;
use crate::models::{DownloadOutcome, DownloadReport, DownloadTask, Round};
use crate::storage;

pub fn pdf_url(base_url: &str, round: Round, code: &str) -> String {
    format!(
        "{}admin/allotment/{}/{}",
        base_url,
        round,
        storage::pdf_file_name(code)
    )
}

/// Download one PDF unless it is already on disk.
pub async fn download_pdf(client: &Client, config: &Config, task: DownloadTask) -> DownloadReport {
    let path = storage::pdf_path(&config.pdf_dir, task.round, &task.code);

    let outcome = if path.exists() {
        debug!("Skipping {}, already present", path.display());
        DownloadOutcome::AlreadyExists
    } else {
        let url = pdf_url(&config.base_url, task.round, &task.code);
        match fetch_pdf(client, &url, &path).await {
            Ok(()) => DownloadOutcome::Downloaded,
            Err(e) => DownloadOutcome::Failed(e),
        }
    };

    DownloadReport { task, path, outcome }
}

async fn fetch_pdf(client: &Client, url: &str, output_path: &Path) -> Result<(), DseError> {
    debug!("Downloading PDF from: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DseError::Status {
            status,
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !content_type.contains("application/pdf") {
        return Err(DseError::NotPdf { content_type });
    }

    let content = response.bytes().await?;
    tokio::fs::write(output_path, &content).await?;
    debug!("Wrote {} bytes to {}", content.len(), output_path.display());

    Ok(())
}
