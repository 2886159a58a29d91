use tracing::trace;

use crate::data::{CatalogEntry, Discoverer, DiscoveryResult, Platform};

/// `(name, external ID)` pairs
pub type FixtureGames = &'static [(&'static str, &'static str)];

const EPIC_GAMES: FixtureGames = &[("Fortnite", "fortnite"), ("Rocket League", "rocketleague")];
const GOG_GAMES: FixtureGames = &[("The Witcher 3", "witcher3"), ("Cyberpunk 2077", "cyberpunk")];

/// Stand-in for platforms without a real scanner yet, which always "discovers" the same games
#[derive(Debug)]
pub struct StaticFixture {
    platform: Platform,
    games: FixtureGames,
}

impl StaticFixture {
    pub fn new(platform: Platform, games: FixtureGames) -> Self {
        StaticFixture { platform, games }
    }

    pub fn epic() -> Self {
        Self::new(Platform::Epic, EPIC_GAMES)
    }

    pub fn gog() -> Self {
        Self::new(Platform::Gog, GOG_GAMES)
    }
}

impl Discoverer for StaticFixture {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_detected(&self) -> bool {
        true
    }

    fn discover(&self) -> DiscoveryResult {
        trace!("{} - Using {} fixture games", self.platform, self.games.len());

        Ok(self
            .games
            .iter()
            .filter_map(|(name, external_id)| CatalogEntry::new(*name, self.platform, *external_id))
            .collect())
    }
}
