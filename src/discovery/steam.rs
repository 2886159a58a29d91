use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::{debug, error, trace};
use walkdir::WalkDir;

use crate::{
    config::LibraryConfig,
    data::{CatalogEntry, Discoverer, DiscoveryResult, Platform},
    error::DiscoveryError,
    macros::logs::{debug_path, warn_no_games},
    parsers::{APPID_KEY, NAME_KEY, extract_value},
    utils::{has_extension, some_if_dir},
};

const PLATFORM: Platform = Platform::Steam;

// UTILS --------------------------------------------------------------------------------
/// Reads a single app manifest line by line, returning an entry as soon as both the app ID and
/// the name have been found. Anything after that point is never read.
#[tracing::instrument(level = "trace")]
fn read_manifest(path_manifest: &Path) -> Result<CatalogEntry, DiscoveryError> {
    let reader = BufReader::new(File::open(path_manifest)?);

    let mut app_id = String::new();
    let mut name = String::new();

    // Split on raw bytes, as other values (e.g. `LastOwner`) aren't guaranteed to be UTF-8
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        // Later matches replace earlier ones, but an empty extraction means "not found"
        if line.contains(APPID_KEY) {
            let value = extract_value(&line);
            if !value.is_empty() {
                app_id = value;
            }
        }
        if line.contains(NAME_KEY) {
            let value = extract_value(&line);
            if !value.is_empty() {
                name = value;
            }
        }

        if !app_id.is_empty() && !name.is_empty() {
            return CatalogEntry::new(name, PLATFORM, app_id)
                .ok_or_else(|| DiscoveryError::IncompleteManifest(path_manifest.to_owned()));
        }
    }

    Err(DiscoveryError::IncompleteManifest(path_manifest.to_owned()))
}

// STEAM --------------------------------------------------------------------------------
/// Discovers Steam games from the app manifest (`.acf`) files in `~/.steam/steam/steamapps`
#[derive(Debug)]
pub struct SteamManifestScan {
    path_steamapps: Option<PathBuf>,
}

impl SteamManifestScan {
    pub fn new(config: &LibraryConfig) -> Self {
        Self::from_path(config.path_steamapps())
    }

    /// Scan the given manifest directory directly. `None` means there is nothing to scan.
    pub fn from_path(path_steamapps: Option<PathBuf>) -> Self {
        if let Some(path_steamapps) = &path_steamapps {
            debug_path!("Steam apps directory", path_steamapps);
        } else {
            debug!("{PLATFORM} - No home directory, so no Steam apps directory to scan");
        }

        SteamManifestScan { path_steamapps }
    }

    /// Find and return paths of the app manifest files, sorted by file name so repeated scans
    /// produce the same order
    #[tracing::instrument(level = "trace")]
    fn get_manifest_paths(&self, path_steamapps: &Path) -> Vec<PathBuf> {
        WalkDir::new(path_steamapps)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|res| {
                let dir_entry = res
                    .map_err(|e| {
                        error!("{PLATFORM} - Error with reading Steam apps directory entry:\n{e}");
                    })
                    .ok()?;
                let path = dir_entry.into_path();

                if !has_extension(&path, "acf") {
                    trace!("{PLATFORM} - File skipped as it is not an app manifest: {path:?}");
                    return None;
                }

                Some(path)
            })
            .collect()
    }
}

impl Discoverer for SteamManifestScan {
    fn platform(&self) -> Platform {
        PLATFORM
    }

    fn is_detected(&self) -> bool {
        self.path_steamapps.as_ref().is_some_and(|p| p.is_dir())
    }

    #[tracing::instrument(level = "trace")]
    fn discover(&self) -> DiscoveryResult {
        // A missing Steam install is expected, so this is not an error
        let Some(path_steamapps) = self.path_steamapps.clone().and_then(some_if_dir) else {
            debug!("{PLATFORM} - Steam apps directory not found, skipping");
            return Ok(Vec::new());
        };

        let games: Vec<CatalogEntry> = self
            .get_manifest_paths(&path_steamapps)
            .iter()
            .filter_map(|path| match read_manifest(path) {
                Ok(game) => {
                    trace!("{PLATFORM} - Found '{}' in {path:?}", game.name());
                    Some(game)
                }
                Err(e @ DiscoveryError::IncompleteManifest(_)) => {
                    debug!("{PLATFORM} - Skipped app manifest: {e}");
                    None
                }
                Err(e) => {
                    error!("{PLATFORM} - Error with reading Steam app manifest file at {path:?}:\n{e}");
                    None
                }
            })
            .collect();

        if games.is_empty() {
            warn_no_games!();
        }

        Ok(games)
    }
}
