//! Per-platform discovery strategies.

mod fixture;
mod steam;

pub use fixture::{FixtureGames, StaticFixture};
pub use steam::SteamManifestScan;

use crate::{config::LibraryConfig, data::Discoverers};

/// The default strategy for each supported platform, in scan order (Steam, Epic, GOG)
pub fn default_discoverers(config: &LibraryConfig) -> Discoverers {
    vec![
        Box::new(SteamManifestScan::new(config)),
        Box::new(StaticFixture::epic()),
        Box::new(StaticFixture::gog()),
    ]
}
