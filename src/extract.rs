//! One-shot extraction: source document → one CSV per category found.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::output::{write_projects, WriteOutcome};
use crate::parser::{extract_projects, sections::locate_span};
use crate::registry::CategorySpec;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub missing: usize,
    pub files_written: usize,
    pub empty: usize,
    pub records: usize,
}

impl RunSummary {
    pub fn print(&self) {
        println!(
            "\n{} categories found ({} missing), {} files written ({} empty), {} projects.",
            self.found, self.missing, self.files_written, self.empty, self.records,
        );
    }
}

pub fn run(source: &Path, out_dir: &Path, categories: &[CategorySpec]) -> Result<RunSummary> {
    let content = fs::read_to_string(source).map_err(|e| Error::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;
    fs::create_dir_all(out_dir).map_err(|e| Error::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    info!(
        source = %source.display(),
        out_dir = %out_dir.display(),
        categories = categories.len(),
        "Starting catalog extraction"
    );
    run_document(&content, out_dir, categories)
}

/// Process an in-memory document; categories are handled in registry order.
pub fn run_document(
    content: &str,
    out_dir: &Path,
    categories: &[CategorySpec],
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for category in categories {
        println!("\nProcessing category: {}", category.key);

        let Some(span) = locate_span(content, category.heading) else {
            println!("  Category not found: {}", category.heading);
            warn!(category = category.key, "heading not found");
            summary.missing += 1;
            continue;
        };
        summary.found += 1;
        debug!(category = category.key, start = span.start, end = span.end, "category span");

        let parsed = extract_projects(&content[span], category.key);
        debug!(
            category = category.key,
            projects = parsed.projects.len(),
            skipped = parsed.skipped_bullets,
            "parsed category"
        );

        match write_projects(&parsed.projects, &out_dir.join(category.filename))? {
            WriteOutcome::Written(n) => {
                summary.files_written += 1;
                summary.records += n;
            }
            WriteOutcome::Empty => summary.empty += 1,
        }
    }

    Ok(summary)
}
