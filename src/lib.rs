//! Fetch the DSE institute list, mirror the CAP1/CAP2 allotment PDFs to
//! disk and search them for a candidate name.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod errors;
pub mod models;
pub mod reader;
pub mod report;
pub mod search;
pub mod session;
pub mod storage;

pub use errors::DseError;
