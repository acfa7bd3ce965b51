//! Access to the CSV tables the aggregation services read.
//!
//! Handlers never touch the filesystem directly. They receive a [`TableSource`] as
//! `web::Data<dyn TableSource>` and ask it for the [`DataFile`]s they need. Two sources
//! exist:
//!
//! - [`DirectorySource`] reads and decodes the file on every request, so edits to the
//!   data directory are picked up without a restart.
//! - [`PreloadedSource`] decodes every known file once at startup and hands out shared
//!   tables afterwards.
//!
//! Both report an absent file as [`LoadError::Missing`], which the services turn into a
//! `404` for the file they treat as primary.

pub mod csv;
mod directory;
mod preloaded;

pub use directory::DirectorySource;
pub use preloaded::PreloadedSource;

use common::model::table::Table;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// The CSV files of the dataset the service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
    StudentInfo,
    StudentRegistration,
    StudentAssessment,
    StudentVle,
    Assessments,
}

impl DataFile {
    pub const ALL: [DataFile; 5] = [
        DataFile::StudentInfo,
        DataFile::StudentRegistration,
        DataFile::StudentAssessment,
        DataFile::StudentVle,
        DataFile::Assessments,
    ];

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DataFile::StudentInfo => "studentInfo.csv",
            DataFile::StudentRegistration => "studentRegistration.csv",
            DataFile::StudentAssessment => "studentAssessment.csv",
            DataFile::StudentVle => "studentVle.csv",
            DataFile::Assessments => "assessments.csv",
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Errors raised while obtaining a table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist in the data directory.
    #[error("Data file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing { .. })
    }
}

/// Read-only provider of decoded tables, shared by all request handlers.
pub trait TableSource: Send + Sync {
    fn table(&self, file: DataFile) -> Result<Arc<Table>, LoadError>;

    /// Short label for the loading strategy, reported by the health endpoint.
    fn mode(&self) -> &'static str;
}
