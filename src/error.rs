use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read source document at {path:?}")]
    ReadSource { path: PathBuf, source: std::io::Error },
    #[error("Failed to create output directory {path:?}")]
    CreateOutputDir { path: PathBuf, source: std::io::Error },
    #[error("Failed to write CSV file {path:?}")]
    WriteOutput { path: PathBuf, source: csv::Error },
    #[error("Failed to read CSV file {path:?}")]
    ReadCsv { path: PathBuf, source: csv::Error },
    #[error("Failed to list directory {path:?}")]
    ListDir { path: PathBuf, source: std::io::Error },
    #[error("Failed to write SQL script {path:?}")]
    WriteSql { path: PathBuf, source: std::io::Error },
}
