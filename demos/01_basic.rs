use lib_game_library::{filter::PlatformFilter, get_library};
use tracing::debug;

fn main() {
    // Init tracing
    tracing_subscriber::fmt::init();

    debug!("Initialising library");
    let mut library = get_library();
    library.scan_all();

    dbg!(library.get_detected_platforms());
    dbg!(library.get_games());
    dbg!(library.filter(PlatformFilter::All, "the"));
}
