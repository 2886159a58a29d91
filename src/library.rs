use itertools::Itertools;
use tracing::{debug, error, trace};

use crate::{
    config::LibraryConfig,
    data::{CatalogEntry, Discoverer, Discoverers, Platform},
    discovery::default_discoverers,
    filter::{PlatformFilter, filter},
};

/// Owns the catalog of discovered games, and the discovery strategy used for each platform
#[derive(Debug)]
pub struct GameLibrary {
    discoverers: Discoverers,
    games: Vec<CatalogEntry>,
}

impl GameLibrary {
    /// Library using the default discovery strategy for every platform. The catalog is empty
    /// until [`GameLibrary::scan_all`] is called.
    pub fn new(config: &LibraryConfig) -> Self {
        Self::with_discoverers(default_discoverers(config))
    }

    /// Library using the given discovery strategies, which are scanned in the given order
    pub fn with_discoverers(discoverers: Discoverers) -> Self {
        GameLibrary {
            discoverers,
            games: Vec::new(),
        }
    }

    /// Runs discovery for a single platform. Errors are logged and result in no games, and
    /// platforms without a discovery strategy have no games.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn scan(&self, platform: Platform) -> Vec<CatalogEntry> {
        self.discoverers
            .iter()
            .filter(|d| d.platform() == platform)
            .flat_map(|d| discover_or_log(d.as_ref()))
            .collect()
    }

    pub fn scan_steam(&self) -> Vec<CatalogEntry> {
        self.scan(Platform::Steam)
    }

    pub fn scan_epic(&self) -> Vec<CatalogEntry> {
        self.scan(Platform::Epic)
    }

    pub fn scan_gog(&self) -> Vec<CatalogEntry> {
        self.scan(Platform::Gog)
    }

    /// Replaces the catalog with the result of a fresh scan of every platform, in order
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn scan_all(&mut self) {
        self.games.clear();

        for discoverer in &self.discoverers {
            self.games.extend(discover_or_log(discoverer.as_ref()));
        }

        debug!(
            "Scanned {} games ({})",
            self.games.len(),
            self.games
                .iter()
                .counts_by(CatalogEntry::platform)
                .into_iter()
                .sorted()
                .map(|(platform, count)| format!("{platform}: {count}"))
                .join(", ")
        );
    }

    /// Games found by the last [`GameLibrary::scan_all`], in discovery order
    pub fn get_games(&self) -> &[CatalogEntry] {
        &self.games
    }

    /// See [`filter`]
    pub fn filter(&self, platform: PlatformFilter, query: &str) -> Vec<&CatalogEntry> {
        filter(&self.games, platform, query)
    }

    /// Platforms whose install location could be found
    pub fn get_detected_platforms(&self) -> Vec<Platform> {
        self.discoverers
            .iter()
            .filter(|d| d.is_detected())
            .map(|d| d.platform())
            .unique()
            .collect()
    }
}

fn discover_or_log(discoverer: &dyn Discoverer) -> Vec<CatalogEntry> {
    let platform = discoverer.platform();

    match discoverer.discover() {
        Ok(games) => {
            trace!("{platform} - Discovered games: {games:?}");
            games
        }
        Err(e) => {
            error!("{platform} - Error with discovering games:\n{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        data::DiscoveryResult,
        discovery::{SteamManifestScan, StaticFixture},
        error::DiscoveryError,
        test_utils::get_mock_file_system_path,
    };

    #[derive(Debug)]
    struct FailingDiscoverer;

    impl Discoverer for FailingDiscoverer {
        fn discover(&self) -> DiscoveryResult {
            Err(DiscoveryError::Io(std::io::Error::other("unreadable")))
        }

        fn is_detected(&self) -> bool {
            false
        }

        fn platform(&self) -> Platform {
            Platform::Steam
        }
    }

    fn summary(games: &[CatalogEntry]) -> Vec<(&str, Platform, &str)> {
        games
            .iter()
            .map(|g| (g.name(), g.platform(), g.external_id()))
            .collect()
    }

    #[test]
    fn test_new_library_is_empty() {
        let library = GameLibrary::new(&LibraryConfig::with_home(get_mock_file_system_path()));

        assert!(library.get_games().is_empty());
    }

    #[test]
    fn test_scan_all_mock_file_system() {
        let mut library = GameLibrary::new(&LibraryConfig::with_home(get_mock_file_system_path()));
        library.scan_all();

        assert_eq!(
            summary(library.get_games()),
            [
                ("Team Fortress 2", Platform::Steam, "440"),
                ("Portal 2", Platform::Steam, "620"),
                ("Fortnite", Platform::Epic, "fortnite"),
                ("Rocket League", Platform::Epic, "rocketleague"),
                ("The Witcher 3", Platform::Gog, "witcher3"),
                ("Cyberpunk 2077", Platform::Gog, "cyberpunk"),
            ]
        );
        assert_eq!(
            library.get_detected_platforms(),
            [Platform::Steam, Platform::Epic, Platform::Gog]
        );
    }

    #[test]
    fn test_scan_all_is_repeatable() {
        let mut library = GameLibrary::new(&LibraryConfig::with_home(get_mock_file_system_path()));

        library.scan_all();
        let first = library.get_games().to_vec();
        library.scan_all();

        assert_eq!(library.get_games(), first.as_slice());
    }

    #[test]
    fn test_scan_all_without_steam() {
        let home = TempDir::new().unwrap();
        let mut library = GameLibrary::new(&LibraryConfig::with_home(home.path()));
        library.scan_all();

        assert!(library.scan_steam().is_empty());
        assert_eq!(library.get_games().len(), 4);
        assert!(
            library
                .get_games()
                .iter()
                .all(|g| g.platform() != Platform::Steam)
        );
        assert_eq!(library.get_detected_platforms(), [Platform::Epic, Platform::Gog]);
    }

    #[test]
    fn test_scan_all_replaces_catalog() {
        let home = TempDir::new().unwrap();
        let path_steamapps = home.path().join(".steam/steam/steamapps");
        fs::create_dir_all(&path_steamapps).unwrap();
        fs::write(
            path_steamapps.join("appmanifest_730.acf"),
            "\t\"name\"\t\t\"CS\"\n\t\"appid\"\t\t\"730\"\n",
        )
        .unwrap();
        fs::write(
            path_steamapps.join("appmanifest_731.acf"),
            "\t\"appid\"\t\t\"731\"\n",
        )
        .unwrap();

        let mut library = GameLibrary::new(&LibraryConfig::with_home(home.path()));
        library.scan_all();

        assert_eq!(
            summary(&library.scan_steam()),
            [("CS", Platform::Steam, "730")]
        );
        assert_eq!(library.get_games().len(), 5);

        fs::remove_file(path_steamapps.join("appmanifest_730.acf")).unwrap();
        library.scan_all();

        assert!(library.scan_steam().is_empty());
        assert_eq!(library.get_games().len(), 4);
    }

    #[test]
    fn test_scan_per_platform() {
        let library = GameLibrary::new(&LibraryConfig::with_home(get_mock_file_system_path()));

        assert_eq!(library.scan_steam().len(), 2);
        assert_eq!(library.scan_epic(), StaticFixture::epic().discover().unwrap());
        assert_eq!(library.scan_gog(), StaticFixture::gog().discover().unwrap());

        // Scanning a single platform never touches the catalog
        assert!(library.get_games().is_empty());
    }

    #[test]
    fn test_discovery_errors_are_not_surfaced() {
        let mut library = GameLibrary::with_discoverers(vec![
            Box::new(FailingDiscoverer),
            Box::new(StaticFixture::gog()),
        ]);
        library.scan_all();

        assert!(library.scan_steam().is_empty());
        assert_eq!(
            summary(library.get_games()),
            [
                ("The Witcher 3", Platform::Gog, "witcher3"),
                ("Cyberpunk 2077", Platform::Gog, "cyberpunk"),
            ]
        );
        assert!(library.scan_epic().is_empty());
    }

    #[test]
    fn test_custom_discoverers_order() {
        let mut library = GameLibrary::with_discoverers(vec![
            Box::new(StaticFixture::gog()),
            Box::new(SteamManifestScan::from_path(None)),
            Box::new(StaticFixture::epic()),
        ]);
        library.scan_all();

        assert_eq!(
            library
                .get_games()
                .iter()
                .map(|g| g.platform())
                .dedup()
                .collect::<Vec<_>>(),
            [Platform::Gog, Platform::Epic]
        );
    }

    #[test]
    fn test_library_filter() {
        let mut library = GameLibrary::new(&LibraryConfig::with_home(get_mock_file_system_path()));
        library.scan_all();

        assert_eq!(
            library
                .filter(PlatformFilter::All, "2")
                .into_iter()
                .map(CatalogEntry::name)
                .collect::<Vec<_>>(),
            ["Team Fortress 2", "Portal 2", "Cyberpunk 2077"]
        );
        assert_eq!(
            library
                .filter(PlatformFilter::Only(Platform::Steam), "PORTAL")
                .into_iter()
                .map(CatalogEntry::name)
                .collect::<Vec<_>>(),
            ["Portal 2"]
        );
    }
}
