use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use crate::errors::DseError;

/// Admission allotment round; each has its own PDF set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    Cap1,
    Cap2,
}

impl Round {
    /// Rounds in processing order.
    pub const ALL: [Round; 2] = [Round::Cap1, Round::Cap2];

    /// Identifier used in URLs and directory names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Cap1 => "cap1",
            Round::Cap2 => "cap2",
        }
    }

    /// Upper-case form used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            Round::Cap1 => "CAP1",
            Round::Cap2 => "CAP2",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub code: String,
    pub name: String,
    pub sr_no: String,
}

/// Where the catalog entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Scraped,
    /// Placeholder names generated from the fixed code ranges.
    Fallback,
}

/// Institution code to institution metadata.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    institutions: HashMap<String, Institution>,
    source: CatalogSource,
}

impl Catalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            institutions: HashMap::new(),
            source,
        }
    }

    /// Insert or replace the entry for the institution's code.
    pub fn insert(&mut self, institution: Institution) {
        self.institutions.insert(institution.code.clone(), institution);
    }

    pub fn get(&self, code: &str) -> Option<&Institution> {
        self.institutions.get(code)
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Codes in ascending numeric order.
    pub fn sorted_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.institutions.keys().map(String::as_str).collect();
        codes.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        codes
    }

    /// Display name for a code, or a generic label when the code is unknown.
    pub fn college_name(&self, code: &str) -> String {
        match self.institutions.get(code) {
            Some(institution) => institution.name.clone(),
            None => format!("Institute {}", code),
        }
    }
}

impl FromIterator<Institution> for Catalog {
    fn from_iter<I: IntoIterator<Item = Institution>>(iter: I) -> Self {
        let mut catalog = Catalog::new(CatalogSource::Scraped);
        for institution in iter {
            catalog.insert(institution);
        }
        catalog
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub code: String,
    pub round: Round,
}

#[derive(Debug)]
pub enum DownloadOutcome {
    Downloaded,
    AlreadyExists,
    Failed(DseError),
}

/// Result of a single download task.
#[derive(Debug)]
pub struct DownloadReport {
    pub task: DownloadTask,
    pub path: PathBuf,
    pub outcome: DownloadOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub already_exists: usize,
    pub failed: usize,
}

impl DownloadSummary {
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded => self.downloaded += 1,
            DownloadOutcome::AlreadyExists => self.already_exists += 1,
            DownloadOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.already_exists + self.failed
    }
}

/// Outcome of scanning one PDF for a name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PdfMatch {
    pub found: bool,
    pub context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub institute_code: String,
    pub college_name: String,
    pub pdf_file: String,
    pub context: Vec<String>,
}

/// Hits for one query, grouped by round.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    by_round: BTreeMap<Round, Vec<SearchHit>>,
}

impl SearchResults {
    pub fn push(&mut self, round: Round, hit: SearchHit) {
        self.by_round.entry(round).or_default().push(hit);
    }

    pub fn hits(&self, round: Round) -> &[SearchHit] {
        self.by_round.get(&round).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_round.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
