use crate::record::{MalformedRecord, RECORD_SIZE};
use std::io;
use std::path::PathBuf;

/// Failures reported by [`Store`](super::Store) operations.
///
/// None of them is retried; the caller decides whether to run the command again.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data file could not be opened for append, or the record could not be
    /// written. Any partial record was rolled back.
    #[error("failed to write record to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record could not be written and the file could not be truncated back
    /// to its previous length. The tail is likely torn; `repair` restores alignment.
    #[error(
        "failed to write record to {} and could not roll back to {} bytes",
        .path.display(),
        .len
    )]
    TornWrite {
        path: PathBuf,
        len: u64,
        #[source]
        source: io::Error,
    },

    /// The data file could not be opened or read. A missing file lands here too.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file length is not a whole number of records.
    #[error(
        "corrupt store {}: {} bytes is not a multiple of the {}-byte record width",
        .path.display(),
        .len,
        RECORD_SIZE
    )]
    Corrupt { path: PathBuf, len: u64 },

    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}

impl StoreError {
    /// True when a read failed only because the data file does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
