use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    Malformed,
}

/// Failure to turn the record file into a snapshot.
#[derive(Error, Debug, Clone)]
pub enum RecordLoadError {
    #[error("Failed to read record file {path}: {reason}")]
    NotFound { path: String, reason: String },

    #[error("Malformed record file {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl RecordLoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            RecordLoadError::NotFound { .. } => LoadErrorKind::NotFound,
            RecordLoadError::Malformed { .. } => LoadErrorKind::Malformed,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            RecordLoadError::NotFound { path, .. } | RecordLoadError::Malformed { path, .. } => {
                path
            }
        }
    }
}
