//! Console rendering of search results

use std::fmt::Write;

use crate::models::{Round, SearchResults};

pub fn render_results(results: &SearchResults, needle: &str) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "SEARCH RESULTS FOR: {}", needle);
    let _ = writeln!(out, "{}", rule);

    let total = results.total();
    if total == 0 {
        let _ = writeln!(out, "❌ Name '{}' not found in any PDF.", needle);
        let _ = writeln!(out, "Possible reasons:");
        let _ = writeln!(out, "- Name not in allotment lists");
        let _ = writeln!(out, "- Name spelled differently");
        let _ = writeln!(out, "- PDFs for relevant colleges not available");
        return out;
    }

    let _ = writeln!(out, "✅ Name found in {} PDF(s)\n", total);

    for round in Round::ALL {
        let hits = results.hits(round);
        if hits.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n{} RESULTS:", round.label());
        let _ = writeln!(out, "{}", "-".repeat(40));
        for hit in hits {
            let _ = writeln!(out, "Institute Code: {}", hit.institute_code);
            let _ = writeln!(out, "College: {}", hit.college_name);
            let _ = writeln!(out, "PDF File: {}", hit.pdf_file);
            if !hit.context.is_empty() {
                let _ = writeln!(out, "Context:");
                for line in &hit.context {
                    let _ = writeln!(out, "  → {}", line);
                }
            }
            let _ = writeln!(out);
        }
    }

    out
}

pub fn display_results(results: &SearchResults, needle: &str) {
    print!("{}", render_results(results, needle));
}
