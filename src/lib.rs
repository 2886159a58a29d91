//! A Rust library for discovering games installed across multiple platforms, searching the
//! resulting catalog, and launching games through each platform's own launch mechanism.
//!
//! # Description
//!
//! This is the core of a local games launcher: it knows how to find installed games, normalise
//! them into a single ordered catalog, filter that catalog by platform and name, and build the
//! command which starts a game. Drawing any of this on screen is left to the caller.
//!
//! # Usage
//!
//! ```rust
//! use lib_game_library::{
//!     data::Platform, filter::PlatformFilter, get_library, launch::build_launch_command,
//! };
//!
//! let mut library = get_library();
//! library.scan_all();
//!
//! let all_games = library.get_games();
//! let epic_games = library.filter(PlatformFilter::Only(Platform::Epic), "rocket");
//!
//! for game in epic_games {
//!     println!("{}: {}", game.name(), build_launch_command(game));
//! }
//! ```
//!
//! # Currently supported game sources
//!
//! - Steam
//!   - Every `.acf` app manifest in `~/.steam/steam/steamapps` is read for its `appid` and `name`
//! - Epic Games Store and GOG
//!   - A fixed set of placeholder games, until real discovery is implemented for these

pub mod config;
pub mod data;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod launch;
pub mod library;
mod macros;
mod parsers;
mod utils;

#[cfg(test)]
mod test_utils;

pub use parsers::extract_value;

use config::LibraryConfig;
use library::GameLibrary;

/// Primary entry point into the crate - get a [`GameLibrary`] for the current user, with an empty
/// catalog
pub fn get_library() -> GameLibrary {
    GameLibrary::new(&LibraryConfig::from_env())
}
