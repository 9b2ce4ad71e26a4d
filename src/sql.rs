//! Seed-script export: turns written CSV files into `INSERT` statements.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::CREATED_AT_PLACEHOLDER;

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

const CATEGORIES_FILE: &str = "categories.csv";

pub struct ExportStats {
    pub project_files: usize,
    pub statements: usize,
}

/// Render one table's rows as a single multi-row `INSERT`; `None` when there are no rows.
pub fn table_to_sql(table: &str, headers: &[String], rows: &[Vec<String>]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut sql = format!("-- {} data\n", table);
    sql.push_str(&format!(
        "INSERT INTO {} ({}) VALUES\n",
        table,
        headers.iter().join(", ")
    ));
    sql.push_str(
        &rows
            .iter()
            .map(|row| format!("({})", row.iter().map(|f| sql_value(f)).join(", ")))
            .join(",\n"),
    );
    sql.push_str(conflict_clause(table));
    Some(sql)
}

fn conflict_clause(table: &str) -> &'static str {
    match table {
        "categories" => "\nON CONFLICT (name) DO NOTHING;\n\n",
        "projects" => "\nON CONFLICT (url) DO NOTHING;\n\n",
        _ => ";\n\n",
    }
}

pub fn sql_value(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        "NULL".to_string()
    } else if trimmed == CREATED_AT_PLACEHOLDER {
        trimmed.to_string()
    } else if UUID_RE.is_match(trimmed) {
        format!("'{}'", trimmed)
    } else {
        format!("'{}'", field.replace('\'', "''"))
    }
}

fn read_table(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let wrap = |source: csv::Error| Error::ReadCsv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(wrap)?;
    let headers = reader
        .headers()
        .map_err(wrap)?
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.map(|rec| rec.iter().map(str::to_string).collect()))
        .collect::<std::result::Result<Vec<Vec<String>>, _>>()
        .map_err(wrap)?;
    Ok((headers, rows))
}

fn file_to_sql(path: &Path, table: &str) -> Result<Option<String>> {
    let (headers, rows) = read_table(path)?;
    let sql = table_to_sql(table, &headers, &rows);
    if sql.is_none() {
        println!("No data in {}", path.display());
    }
    Ok(sql)
}

/// `projects_*.csv` files in `dir`, sorted by name.
pub fn project_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::ListDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let files = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("projects_") && n.ends_with(".csv"))
        })
        .sorted()
        .collect();
    Ok(files)
}

/// Build the full seed script from `data_dir` and write it to `output`.
pub fn export(data_dir: &Path, output: &Path) -> Result<ExportStats> {
    let mut script = String::from("-- Catalog categories and projects seed data\n");
    script.push_str(&format!("-- Generated: {}\n\n", chrono::Utc::now().to_rfc3339()));
    let mut statements = 0;

    let categories = data_dir.join(CATEGORIES_FILE);
    if categories.exists() {
        println!("Processing category data...");
        if let Some(sql) = file_to_sql(&categories, "categories")? {
            script.push_str(&sql);
            statements += 1;
        }
    }

    let files = project_files(data_dir)?;
    println!("Processing {} project files...", files.len());
    for file in &files {
        debug!(file = %file.display(), "converting");
        println!("Processing: {}", file.display());
        if let Some(sql) = file_to_sql(file, "projects")? {
            script.push_str(&sql);
            statements += 1;
        }
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::WriteSql {
            path: output.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(output, &script).map_err(|e| Error::WriteSql {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!(output = %output.display(), statements, "SQL script written");
    Ok(ExportStats {
        project_files: files.len(),
        statements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{write_projects, ProjectRecord};

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn value_rendering() {
        assert_eq!(sql_value(""), "NULL");
        assert_eq!(sql_value("   "), "NULL");
        assert_eq!(sql_value("NOW()"), "NOW()");
        assert_eq!(
            sql_value(" 3F2504E0-4F89-41D3-9A0C-0305E82C3301 "),
            "'3F2504E0-4F89-41D3-9A0C-0305E82C3301'"
        );
        assert_eq!(sql_value("O'Reilly"), "'O''Reilly'");
        assert_eq!(sql_value("a, b"), "'a, b'");
    }

    #[test]
    fn conflict_clauses() {
        let headers = strings(&["name", "url"]);
        let rows = vec![strings(&["a", "https://a.dev"])];
        assert!(table_to_sql("projects", &headers, &rows)
            .unwrap()
            .ends_with("ON CONFLICT (url) DO NOTHING;\n\n"));
        assert!(table_to_sql("categories", &headers, &rows)
            .unwrap()
            .ends_with("ON CONFLICT (name) DO NOTHING;\n\n"));
        assert!(table_to_sql("tags", &headers, &rows).unwrap().ends_with("');\n\n"));
        assert_eq!(table_to_sql("projects", &headers, &[]), None);
    }

    #[test]
    fn statement_shape() {
        let headers = strings(&["id", "name"]);
        let rows = vec![strings(&["", "one"]), strings(&["", "two"])];
        let sql = table_to_sql("projects", &headers, &rows).unwrap();
        assert_eq!(
            sql,
            "-- projects data\nINSERT INTO projects (id, name) VALUES\n(NULL, 'one'),\n(NULL, 'two')\nON CONFLICT (url) DO NOTHING;\n\n"
        );
    }

    #[test]
    fn export_from_written_csv() {
        let dir = tempfile::tempdir().unwrap();
        let record = ProjectRecord {
            id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".into(),
            name: "ToolX".into(),
            title: "ToolX".into(),
            description: "Scans, audits and \"fixes\"".into(),
            url: "https://example.com".into(),
            category: "security".into(),
            status: "active".into(),
            created_at: "NOW()".into(),
        };
        write_projects(&[record], &dir.path().join("projects_security.csv")).unwrap();
        fs::write(dir.path().join("projects_empty.csv"), "id,name\n").unwrap();
        fs::write(dir.path().join("categories.csv"), "name,title\nsecurity,보안\n").unwrap();
        fs::write(dir.path().join("notes.csv"), "ignored\n").unwrap();

        let output = dir.path().join("sql/seed.sql");
        let stats = export(dir.path(), &output).unwrap();
        assert_eq!(stats.project_files, 2);
        assert_eq!(stats.statements, 2);

        let sql = fs::read_to_string(&output).unwrap();
        assert!(sql.starts_with("-- Catalog categories and projects seed data\n-- Generated: "));
        assert!(sql.contains("INSERT INTO categories (name, title) VALUES\n('security', '보안')"));
        assert!(sql.contains(
            "('3f2504e0-4f89-41d3-9a0c-0305e82c3301', 'ToolX', 'ToolX', 'Scans, audits and \"fixes\"', 'https://example.com', 'security', 'active', NOW())"
        ));
        assert!(sql.find("INSERT INTO categories").unwrap() < sql.find("INSERT INTO projects").unwrap());
        assert!(!sql.contains("ignored"));
    }
}
