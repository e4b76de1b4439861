//! Errors raised before any request is sent.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please select a file first")]
    NoFileSelected,
    #[error("{} is not a .pdf file", .0.display())]
    NotPdf(PathBuf),
    #[error("cannot read {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
