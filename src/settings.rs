use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Source markdown catalog.
    pub input: PathBuf,
    /// Directory the per-category CSV files are written to (and read back by `sql`).
    pub out_dir: PathBuf,
    /// SQL script filename, relative to `out_dir` unless overridden on the CLI.
    pub sql_file: String,
}

impl Settings {
    /// Defaults overlaid with `CATALOG_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("CATALOG"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("input", "README-ko.md")?
            .set_default("out_dir", ".")?
            .set_default("sql_file", "insert_all_data.sql")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
