use clap::Parser;
use lib_game_library::{
    filter::PlatformFilter,
    get_library,
    launch::{build_launch_command, execute},
};

/// Search the detected games, optionally launching the first match
#[derive(Parser, Debug)]
struct Args {
    /// Platform to search: all, steam, epic or gog
    #[arg(short, long, default_value = "all")]
    platform: PlatformFilter,

    /// Case-insensitive text to look for in game names
    query: Option<String>,

    /// Launch the first matching game
    #[arg(long)]
    launch: bool,
}

// Usage: cargo run --example 04_search -- [--platform <PLATFORM>] [QUERY] [--launch]
fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let query = args.query.as_deref().unwrap_or_default();

    let mut library = get_library();
    library.scan_all();

    let results = library.filter(args.platform, query);
    if results.is_empty() {
        println!("No {} games matching {query:?}.", args.platform.label());
        return;
    }

    for game in &results {
        println!(
            "{} ({}): {}",
            game.name(),
            game.platform(),
            build_launch_command(game)
        );
    }

    if args.launch {
        execute(&build_launch_command(results[0]));
    }
}
