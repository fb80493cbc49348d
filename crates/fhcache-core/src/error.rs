//! Error types surfaced to the protocol engine.

use thiserror::Error;

use crate::status::NfsStatus;

/// Errors returned by handler operations.
///
/// Every variant maps onto a wire status through [`NfsError::status`]; the
/// protocol engine decides how to encode it.
#[derive(Debug, Error)]
pub enum NfsError {
    /// The handle bytes do not parse into a handle identifier.
    #[error("Malformed file handle: {0}")]
    MalformedHandle(#[from] uuid::Error),

    /// A well-formed handle that does not (or no longer) resolve.
    #[error("Stale file handle")]
    StaleHandle,

    /// A status reported by a wrapped handler or filesystem.
    #[error("NFS error: {0}")]
    Status(NfsStatus),

    /// Native IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NfsError {
    /// The `NFSv3` status the protocol engine should reply with.
    #[must_use]
    pub fn status(&self) -> NfsStatus {
        match self {
            Self::MalformedHandle(_) => NfsStatus::BadHandle,
            Self::StaleHandle => NfsStatus::Stale,
            Self::Status(status) => *status,
            Self::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => NfsStatus::NoEnt,
                std::io::ErrorKind::PermissionDenied => NfsStatus::Access,
                std::io::ErrorKind::AlreadyExists => NfsStatus::Exist,
                _ => NfsStatus::Io,
            },
        }
    }
}

impl From<NfsStatus> for NfsError {
    fn from(status: NfsStatus) -> Self {
        Self::Status(status)
    }
}

/// Convenience result type for handler operations.
pub type NfsResult<T> = Result<T, NfsError>;
