pub mod tsvstore;

use std::io::Error as IoError;

use thiserror::Error;

use crate::index::AsRecord;

pub use tsvstore::TsvStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error happened: {0}")]
    IOError(#[from] IoError),
}

/// Outcome of draining a record source.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<AsRecord>,
    /// Lines that could not be parsed and were left out.
    pub skipped: usize,
}

/// Anything that can hand over the full set of AS records in one go.
pub trait RecordSource {
    fn load(self) -> Result<LoadReport, StoreError>;
}
