//! Purpose: Load-once query access to the job dataset.
//! Exports: `JobStore`.
//! Role: Explicit store object owning the source path and the cached dataset.
//! Invariants: The source is parsed at most once per store; later calls reuse the cache.
//! Invariants: A failed load is reported once (logged) and leaves an empty, unusable view.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::error;

use crate::store::dataset::{Dataset, Record};
use crate::store::error::Error;
use crate::store::source;

struct Loaded {
    dataset: Dataset,
    failure: Option<Error>,
}

/// Read-only handle over the job listings source file.
///
/// Construct once and pass by reference; the first query operation loads the
/// dataset and every later call observes the same immutable snapshot.
pub struct JobStore {
    path: PathBuf,
    loaded: OnceCell<Loaded>,
}

impl JobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn loaded(&self) -> &Loaded {
        self.loaded.get_or_init(|| match source::load_file(&self.path) {
            Ok(dataset) => Loaded {
                dataset,
                failure: None,
            },
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to load job data");
                Loaded {
                    dataset: Dataset::empty(),
                    failure: Some(err),
                }
            }
        })
    }

    /// The cached dataset; empty when the load failed.
    pub fn dataset(&self) -> &Dataset {
        &self.loaded().dataset
    }

    /// The load error, if the one load attempt failed.
    pub fn load_failure(&self) -> Option<&Error> {
        self.loaded().failure.as_ref()
    }

    pub fn fields(&self) -> &[String] {
        self.dataset().fields()
    }

    pub fn records(&self) -> &[Record] {
        self.dataset().records()
    }

    pub fn unique_values(&self, field: &str) -> Vec<String> {
        self.dataset().unique_values(field)
    }

    pub fn search_field(&self, field: &str, term: &str) -> Vec<&Record> {
        self.dataset().search_field(field, term)
    }

    pub fn search_any(&self, term: &str) -> Vec<&Record> {
        self.dataset().search_any(term)
    }
}

#[cfg(test)]
mod tests {
    use super::JobStore;
    use crate::store::error::ErrorKind;
    use std::io::Write;

    fn write_csv(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("jobs.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        file.write_all(body.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn loads_once_and_caches() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_csv(temp.path(), "skill,employer\nJava,Acme\nPython,Globex\n");
        let store = JobStore::new(&path);

        assert_eq!(store.records().len(), 2);

        // Deleting the source after the first query must not change anything:
        // the dataset is a cached snapshot, not a live view.
        std::fs::remove_file(&path).expect("remove csv");
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.unique_values("skill"), vec!["Java", "Python"]);
        assert!(store.load_failure().is_none());
    }

    #[test]
    fn missing_source_yields_empty_view_and_stored_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JobStore::new(temp.path().join("absent.csv"));

        assert!(store.records().is_empty());
        assert!(store.search_any("java").is_empty());
        assert!(store.unique_values("skill").is_empty());
        let failure = store.load_failure().expect("load failure");
        assert_eq!(failure.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn queries_delegate_to_the_dataset() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            temp.path(),
            "skill,employer,location\nJava,Acme,NYC\nPython,Globex,LA\n",
        );
        let store = JobStore::new(&path);

        assert_eq!(store.fields(), ["skill", "employer", "location"]);
        assert_eq!(store.search_field("location", "ny").len(), 1);
        assert_eq!(store.search_any("globex").len(), 1);
    }
}
