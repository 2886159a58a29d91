use is_terminal::IsTerminal;
use lib_game_library::get_library;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// NOTE: run with, e.g. `RUST_LOG=trace cargo run --example 03_env_logger > logs.txt`
fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();

    get_library().scan_all();
}
