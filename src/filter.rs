//! Search and platform filtering over the catalog.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    data::{CatalogEntry, Platform},
    error::ParsePlatformError,
};

/// Platform constraint for [`filter`]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// Options in the order they are offered to the user
    pub const OPTIONS: [PlatformFilter; 4] = [
        PlatformFilter::All,
        PlatformFilter::Only(Platform::Steam),
        PlatformFilter::Only(Platform::Epic),
        PlatformFilter::Only(Platform::Gog),
    ];

    /// Maps the index of a selected option (see [`PlatformFilter::OPTIONS`]) to its filter
    pub fn from_selection_index(index: usize) -> Option<Self> {
        Self::OPTIONS.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlatformFilter::All => "All",
            PlatformFilter::Only(platform) => platform.label(),
        }
    }

    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(p) => *p == platform,
        }
    }
}

impl Display for PlatformFilter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PlatformFilter::All => write!(f, "all"),
            PlatformFilter::Only(platform) => write!(f, "{platform}"),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PlatformFilter::All),
            _ => s.parse().map(PlatformFilter::Only),
        }
    }
}

impl From<Platform> for PlatformFilter {
    fn from(platform: Platform) -> Self {
        PlatformFilter::Only(platform)
    }
}

/// Returns the entries on the given platform whose name contains `query`, ignoring ASCII case.
/// An empty query matches everything. Catalog order is preserved.
pub fn filter<'a>(
    catalog: &'a [CatalogEntry],
    platform: PlatformFilter,
    query: &str,
) -> Vec<&'a CatalogEntry> {
    let query = query.to_ascii_lowercase();

    catalog
        .iter()
        .filter(|entry| platform.matches(entry.platform()))
        .filter(|entry| query.is_empty() || entry.name().to_ascii_lowercase().contains(&query))
        .collect()
}
