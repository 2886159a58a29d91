use lib_game_library::{get_library, launch::build_launch_command};

fn main() {
    let mut library = get_library();

    // WARN: errors for each platform are ignored and will only be visible in the logs
    library.scan_all();
    let games = library.get_games();

    if games.is_empty() {
        println!("No games detected.")
    } else {
        println!("Detected games ({}):", games.len());

        for game in games {
            println!(
                "\t- [{}] {} ({})",
                game.platform().label(),
                game.name(),
                build_launch_command(game)
            );
        }
    }
}
