use super::csv::read_table;
use super::{DataFile, LoadError, TableSource};
use common::model::table::Table;
use std::path::PathBuf;
use std::sync::Arc;

/// Reads tables straight from the data directory on every call.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TableSource for DirectorySource {
    fn table(&self, file: DataFile) -> Result<Arc<Table>, LoadError> {
        read_table(&self.dir.join(file.file_name())).map(Arc::new)
    }

    fn mode(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_and_decodes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("studentInfo.csv"),
            "id_student,gender\r\n11,M\r\n12,F\r\n",
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let table = source.table(DataFile::StudentInfo).unwrap();
        assert_eq!(table.headers(), ["id_student", "gender"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.record(1).unwrap().get("gender"), Some("F"));
    }

    #[test]
    fn absent_file_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.table(DataFile::StudentVle).unwrap_err();
        assert!(err.is_missing());
        assert!(err.to_string().contains("studentVle.csv"));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where a file is expected exists but cannot be read as one.
        fs::create_dir(dir.path().join("assessments.csv")).unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.table(DataFile::Assessments).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
