use std::io::{Write, stdout};

use lib_game_library::get_library;

fn main() {
    let mut library = get_library();
    library.scan_all();
    let games = library.get_games();

    if games.is_empty() {
        println!("No games detected.")
    } else {
        let serialized = serde_json::to_string_pretty(games).expect("failed to serialize games");
        let mut stdout = stdout().lock();
        writeln!(&mut stdout, "{serialized}").expect("failed to write to stdout");
    }
}
