use {
    super::{dataset::RecordStore, mock},
    crate::{config::DashboardConfig, error::EngineError},
    std::path::PathBuf,
};

/// Where the dashboard's record store comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// JSON snapshot on disk, re-read on every refresh
    Snapshot(PathBuf),
    /// Generated data; each refresh advances the seed
    Mock { seed: u64, record_count: usize },
}

impl DataSource {
    pub fn from_config(config: &DashboardConfig) -> Self {
        match &config.data_path {
            Some(path) => DataSource::Snapshot(PathBuf::from(path)),
            None => DataSource::Mock {
                seed: config.seed,
                record_count: config.record_count,
            },
        }
    }

    pub fn load(&self) -> Result<RecordStore, EngineError> {
        match self {
            DataSource::Snapshot(path) => RecordStore::from_file(path),
            DataSource::Mock { seed, record_count } => mock::generate(*seed, *record_count),
        }
    }

    /// Load the next store for a refresh
    pub fn reload(&mut self) -> Result<RecordStore, EngineError> {
        if let DataSource::Mock { seed, .. } = self {
            *seed = seed.wrapping_add(1);
        }
        self.load()
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Snapshot(path) => format!("snapshot {}", path.display()),
            DataSource::Mock { seed, .. } => format!("mock data (seed {})", seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mock_reload_advances_seed() {
        let mut source = DataSource::Mock { seed: 10, record_count: 5 };
        let first = source.load().unwrap();
        let second = source.reload().unwrap();

        assert_eq!(source, DataSource::Mock { seed: 11, record_count: 5 });
        assert_eq!(second, mock::generate(11, 5).unwrap());
        assert_ne!(first.records(), second.records());
    }

    #[test]
    fn test_snapshot_source_reads_file() {
        let store = mock::generate(3, 4).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(store.to_json().unwrap().as_bytes()).unwrap();

        let mut source = DataSource::Snapshot(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), store);
        assert_eq!(source.reload().unwrap(), store);
    }

    #[test]
    fn test_missing_snapshot_is_io_error() {
        let source = DataSource::Snapshot(PathBuf::from("/nonexistent/streams.json"));
        assert!(matches!(source.load(), Err(EngineError::Io(_))));
    }
}
