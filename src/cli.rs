use clap::Parser;

/// Everything else happens through interactive prompts; settings come from
/// DSE_* environment variables.
#[derive(Parser)]
#[command(name = "dse-search")]
#[command(about = "Download DSE CAP1/CAP2 allotment PDFs and search them for a candidate name")]
#[command(version)]
pub struct Cli {}
