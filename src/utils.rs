//! Small helpers shared by the record builder.

use uuid::Uuid;

/// Fresh random identifier for one project row.
pub fn new_project_id() -> String {
    Uuid::new_v4().to_string()
}

/// Slug-safe key derived from a display title: `@` and `/` are deleted outright.
pub fn name_from_title(title: &str) -> String {
    title.chars().filter(|c| !matches!(c, '@' | '/')).collect()
}
