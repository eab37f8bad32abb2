use clap::Parser;
use tracing_subscriber::EnvFilter;

use hello::{greet, DEFAULT_NAME};

#[derive(Parser, Debug)]
#[command(name = "hello", version, about = "Print a greeting")]
struct Cli {
    /// Extra names to greet after the world.
    #[arg(long = "name", default_value = "Rust User")]
    names: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hello starting");

    println!("{}", greet(DEFAULT_NAME));
    for name in &cli.names {
        println!("{}", greet(name));
    }
}
