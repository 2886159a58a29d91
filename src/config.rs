//! Process-wide configuration, resolved once and passed into the discovery strategies.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Location of the Steam app manifests, relative to the user's home directory
const STEAMAPPS_RELATIVE_PATH: &str = ".steam/steam/steamapps";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    path_home: Option<PathBuf>,
}

impl LibraryConfig {
    /// Resolves the current user's home directory. If it can't be determined, every
    /// filesystem based scan simply finds nothing.
    pub fn from_env() -> Self {
        let path_home = dirs::home_dir();

        if path_home.is_none() {
            warn!("No valid $HOME directory found for the current user");
        }

        LibraryConfig { path_home }
    }

    /// Uses the given directory as the home directory, regardless of the environment
    pub fn with_home(path_home: impl Into<PathBuf>) -> Self {
        LibraryConfig {
            path_home: Some(path_home.into()),
        }
    }

    pub fn path_home(&self) -> Option<&Path> {
        self.path_home.as_deref()
    }

    /// Directory containing the Steam app manifest (`.acf`) files
    pub fn path_steamapps(&self) -> Option<PathBuf> {
        self.path_home
            .as_ref()
            .map(|home| home.join(STEAMAPPS_RELATIVE_PATH))
    }
}
