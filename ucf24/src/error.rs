use crate::class::ActionClass;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while building or reading the sample index.
///
/// Every variant aborts index construction. A partially built index would
/// silently change the per-class sampling balance.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to open split file '{}': {source}", path.display())]
    MissingSplitFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt annotation store '{origin}': {reason}")]
    CorruptAnnotationStore { origin: String, reason: String },
    #[error("tube {tube} of video '{video}' is labeled {found}, but the video is labeled {expected}")]
    LabelMismatch {
        video: String,
        tube: usize,
        expected: ActionClass,
        found: ActionClass,
    },
    #[error("invalid subset '{0}', expected 'train' or 'test'")]
    InvalidSubset(String),
    #[error("image does not exist: '{}'", path.display())]
    ImageNotFound { path: PathBuf },
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { height: usize, width: usize },
}
