//! Purpose: Shared data-file path resolution for the CLI.
//! Exports: `default_data_path`.
//! Role: Keep the default source location in one place.
//! Invariants: Default data file remains `data/job_data.csv` under the working directory.

use std::path::PathBuf;

pub(crate) fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("job_data.csv")
}
