use std::sync::LazyLock;

use regex::Regex;

use super::text::{clean_description, truncate_chars, MAX_DESCRIPTION_CHARS};
use crate::output::{ProjectRecord, CREATED_AT_PLACEHOLDER, STATUS_ACTIVE};
use crate::utils::{name_from_title, new_project_id};

// Anchored at the raw line start: indented bullets pass the prefix check but not this.
static BULLET_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[([^\]]+)\]\(([^)]+)\)").unwrap());

const BULLET_OPENER: &str = "- [";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a bullet-link line at all (prose, headings, blanks).
    NotBullet,
    /// Starts like a bullet link but has no usable `[title](url)` pair.
    Malformed,
    NonHttpUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Project(ProjectRecord),
    Skipped(SkipReason),
}

/// Parse one catalog line of the form `- [Title](URL) description`.
pub fn parse_line(line: &str, category: &str) -> LineOutcome {
    if !line.trim().starts_with(BULLET_OPENER) {
        return LineOutcome::Skipped(SkipReason::NotBullet);
    }
    let Some(caps) = BULLET_LINK_RE.captures(line) else {
        return LineOutcome::Skipped(SkipReason::Malformed);
    };

    let title = caps[1].trim();
    let url = caps[2].trim();
    if title.is_empty() {
        return LineOutcome::Skipped(SkipReason::Malformed);
    }
    if !url.starts_with("http") {
        return LineOutcome::Skipped(SkipReason::NonHttpUrl);
    }

    let after_link = &line[caps.get(0).map_or(line.len(), |m| m.end())..];
    let description = clean_description(after_link);

    LineOutcome::Project(ProjectRecord {
        id: new_project_id(),
        name: name_from_title(title),
        title: title.to_string(),
        description: truncate_chars(&description, MAX_DESCRIPTION_CHARS),
        url: url.to_string(),
        category: category.to_string(),
        status: STATUS_ACTIVE.to_string(),
        created_at: CREATED_AT_PLACEHOLDER.to_string(),
    })
}
