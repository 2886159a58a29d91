use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use crate::error::{DiscoveryError, ParsePlatformError};

/// Data structure representing a supported games platform
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    Steam,
    Epic,
    Gog,
}

impl Platform {
    /// All supported platforms, in the order they are scanned
    pub const ALL: [Platform; 3] = [Platform::Steam, Platform::Epic, Platform::Gog];

    /// Canonical lowercase name, e.g. `"steam"`
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Epic => "epic",
            Platform::Gog => "gog",
        }
    }

    /// Human readable label, e.g. `"GOG"`
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Steam => "Steam",
            Platform::Epic => "Epic",
            Platform::Gog => "GOG",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParsePlatformError(s.to_owned()))
    }
}

/// Data structure which defines all relevant data about any particular game
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    name: String,
    platform: Platform,
    external_id: String,
    playtime_hours: u32,
}

impl CatalogEntry {
    /// Returns `None` if either the name or the external ID is empty, as such an entry could
    /// neither be displayed nor launched.
    pub fn new(
        name: impl Into<String>,
        platform: Platform,
        external_id: impl Into<String>,
    ) -> Option<Self> {
        let name = name.into();
        let external_id = external_id.into();

        if name.is_empty() || external_id.is_empty() {
            return None;
        }

        Some(CatalogEntry {
            name,
            platform,
            external_id,
            playtime_hours: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Platform specific identifier used to build the launch command (app ID for Steam, slug
    /// for Epic and GOG)
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Not populated by any platform yet, always 0
    pub fn playtime_hours(&self) -> u32 {
        self.playtime_hours
    }
}

/// Custom Result type for a single platform's discovered games
pub type DiscoveryResult = Result<Vec<CatalogEntry>, DiscoveryError>;

// Game discovery is divided up by platform, with one strategy per platform. Strategies can be
// swapped out (e.g. a real Epic scanner replacing the fixture) without touching the library.
pub trait Discoverer: Send + Debug {
    fn discover(&self) -> DiscoveryResult;
    fn is_detected(&self) -> bool;
    fn platform(&self) -> Platform;
}
pub type Discoverers = Vec<Box<dyn Discoverer>>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("steam", Platform::Steam)]
    #[test_case("epic", Platform::Epic)]
    #[test_case("gog", Platform::Gog)]
    fn test_platform_from_str(name: &str, expected: Platform) {
        assert_eq!(name.parse::<Platform>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test_case("Steam"; "case sensitive")]
    #[test_case("all"; "filter sentinel")]
    #[test_case("itch"; "unsupported")]
    #[test_case(""; "empty")]
    fn test_platform_from_str_unknown(name: &str) {
        assert_eq!(
            name.parse::<Platform>(),
            Err(ParsePlatformError(name.to_owned()))
        );
    }

    #[test]
    fn test_catalog_entry_new() {
        let entry = CatalogEntry::new("Team Fortress 2", Platform::Steam, "440").unwrap();

        assert_eq!(entry.name(), "Team Fortress 2");
        assert_eq!(entry.platform(), Platform::Steam);
        assert_eq!(entry.external_id(), "440");
        assert_eq!(entry.playtime_hours(), 0);
    }

    #[test_case("", "440"; "missing name")]
    #[test_case("Team Fortress 2", ""; "missing id")]
    #[test_case("", ""; "missing both")]
    fn test_catalog_entry_new_rejects_empty(name: &str, external_id: &str) {
        assert!(CatalogEntry::new(name, Platform::Steam, external_id).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_catalog_entry_serialize() {
        let entry = CatalogEntry::new("The Witcher 3", Platform::Gog, "witcher3").unwrap();

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "name": "The Witcher 3",
                "platform": "gog",
                "external_id": "witcher3",
                "playtime_hours": 0,
            })
        );
    }
}
