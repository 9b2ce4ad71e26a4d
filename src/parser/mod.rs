pub mod line;
pub mod sections;
pub mod text;

use line::{parse_line, LineOutcome, SkipReason};

use crate::output::ProjectRecord;

#[derive(Debug, Default)]
pub struct CategoryProjects {
    pub projects: Vec<ProjectRecord>,
    /// Bullet-shaped lines that were dropped (malformed or non-HTTP link).
    pub skipped_bullets: usize,
}

/// Parse every line of one category span, keeping document order.
pub fn extract_projects(span: &str, category: &str) -> CategoryProjects {
    let mut out = CategoryProjects::default();
    for line in span.split('\n') {
        match parse_line(line, category) {
            LineOutcome::Project(p) => out.projects.push(p),
            LineOutcome::Skipped(SkipReason::NotBullet) => {}
            LineOutcome::Skipped(_) => out.skipped_bullets += 1,
        }
    }
    out
}
