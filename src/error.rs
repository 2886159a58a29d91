//! Error types used by this crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Custom error type returned when something goes wrong with discovering games for a platform.
///
/// These never reach the caller of [`crate::library::GameLibrary::scan_all`], which logs them
/// and carries on with whatever the other platforms found.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A manifest file was read to the end without yielding both an app ID and a name
    #[error("Incomplete manifest at {0:?}")]
    IncompleteManifest(PathBuf),
}

/// Returned when a platform name is not one of the supported platforms.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown platform: {0:?}")]
pub struct ParsePlatformError(pub String);
