//! Rendering of scan results
//!
//! The text report is what lands on stdout and in the GitHub Actions step
//! summary; the JSON report carries the same data for tooling.

pub mod actions;

use anyhow::Result;
use serde_json::json;

use crate::config::ScanConfig;
use crate::scan::ScanResult;

/// Render the human-readable report
pub fn render_text(result: &ScanResult, config: &ScanConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("Files checked: {}\n", result.files_checked));
    out.push_str(&format!("Directory scanned: {}\n", config.root.display()));
    out.push_str(&format!("Extension checked: {}\n", config.extension));
    out.push_str(&format!("Duplicated keys: {}\n", result.duplicated_key_count()));
    out.push_str(&format!("Duplicate occurrences: {}\n", result.duplicate_occurrences()));
    out.push_str(&format!("Duration: {:?}\n", result.duration));

    if result.has_duplicates() {
        out.push_str("\nDuplicates found! The following keys appear in more than one place:\n\n");
        for (key, matches) in result.duplicate_matches() {
            for file_match in matches {
                out.push_str(&format!("Key: {key}\n"));
                out.push_str(&format!("Path: {}\n", file_match.path.display()));
                out.push_str(&format!("Offset: {}\n", file_match.offset));
                out.push_str(&format!("Matched text: {}\n", file_match.matched_text()));
                out.push_str("...\n\n");
            }
        }
    }

    if !result.large_files.is_empty() {
        out.push_str(&format!(
            "\nSkipped files larger than {} bytes:\n",
            config.max_file_size_bytes
        ));
        let mut large_files: Vec<_> = result.large_files.iter().collect();
        large_files.sort();
        for path in large_files {
            out.push_str(&format!("{}\n", path.display()));
        }
    }

    out
}

/// Render the report as pretty-printed JSON
pub fn render_json(result: &ScanResult, config: &ScanConfig) -> Result<String> {
    let duplicates: Vec<_> = result
        .duplicate_matches()
        .map(|(key, matches)| {
            json!({
                "key": key,
                "count": result.duplicates.get(key),
                "matches": matches,
            })
        })
        .collect();

    let report = json!({
        "summary": {
            "files_checked": result.files_checked,
            "directory": config.root,
            "extension": config.extension,
            "distinct_keys": result.matches.len(),
            "duplicated_keys": result.duplicated_key_count(),
            "duplicate_occurrences": result.duplicate_occurrences(),
            "duration_ms": result.duration.as_millis() as u64,
        },
        "duplicates": duplicates,
        "large_files": result.large_files,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
