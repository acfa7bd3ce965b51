use super::csv::read_table;
use super::{DataFile, LoadError, TableSource};
use common::model::table::Table;
use futures_util::future::join_all;
use log::{info, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Tables decoded once and shared by every request afterwards.
///
/// Files absent at load time stay absent: asking for them yields
/// [`LoadError::Missing`] just as [`super::DirectorySource`] would.
#[derive(Debug, Default)]
pub struct PreloadedSource {
    dir: PathBuf,
    tables: HashMap<DataFile, Arc<Table>>,
}

impl PreloadedSource {
    /// Loads every [`DataFile`] from `dir`, one blocking task per file, and waits for all
    /// of them. Missing files are logged and skipped; any other read failure aborts.
    pub async fn load(dir: PathBuf) -> Result<Self, LoadError> {
        let start = Instant::now();
        let tasks = DataFile::ALL.into_iter().map(|file| {
            let path = dir.join(file.file_name());
            async move {
                let task_path = path.clone();
                let loaded =
                    tokio::task::spawn_blocking(move || read_table(&task_path)).await;
                match loaded {
                    Ok(result) => (file, result),
                    Err(join_err) => (
                        file,
                        Err(LoadError::Io {
                            path,
                            source: std::io::Error::other(join_err),
                        }),
                    ),
                }
            }
        });

        let mut tables = HashMap::new();
        for (file, result) in join_all(tasks).await {
            match result {
                Ok(table) => {
                    info!("Preloaded {} ({} rows)", file, table.len());
                    tables.insert(file, Arc::new(table));
                }
                Err(err @ LoadError::Missing { .. }) => warn!("{}; skipping", err),
                Err(err) => return Err(err),
            }
        }
        info!("Preload finished in {:.2?}", start.elapsed());

        Ok(Self { dir, tables })
    }

    /// Builds a source from tables already in memory.
    #[cfg(test)]
    pub fn from_tables(tables: impl IntoIterator<Item = (DataFile, Table)>) -> Self {
        Self {
            dir: PathBuf::new(),
            tables: tables
                .into_iter()
                .map(|(file, table)| (file, Arc::new(table)))
                .collect(),
        }
    }
}

impl TableSource for PreloadedSource {
    fn table(&self, file: DataFile) -> Result<Arc<Table>, LoadError> {
        self.tables
            .get(&file)
            .cloned()
            .ok_or_else(|| LoadError::Missing {
                path: self.dir.join(file.file_name()),
            })
    }

    fn mode(&self) -> &'static str {
        "preloaded"
    }
}
