use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airlink_cli::output::OutputFormat;
use airlink_lib::{resolve_network, FlightGraph, MAX_RESERVATIONS};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline flight network and reservation tools")]
struct Cli {
    /// Network JSON file to load. Falls back to `AIRLINK_NETWORK`, then the
    /// built-in sample network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the cities serviced by the airline.
    Cities {
        /// List every flight endpoint instead of the city registry.
        #[arg(long)]
        served: bool,
    },
    /// Show departures from a city, earliest first.
    Departures {
        #[arg(long)]
        city: String,
    },
    /// Show arrivals into a city, earliest first.
    Arrivals {
        #[arg(long)]
        city: String,
    },
    /// Show cities reachable from a city with one direct flight.
    Reachable {
        #[arg(long)]
        city: String,
    },
    /// Show the path with the fewest hops between two cities.
    Path {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Find connecting flights that reach the destination earliest.
    Route {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Replay a JSON booking script against a fresh reservation book.
    Book {
        /// Path to the booking script.
        #[arg(long)]
        script: PathBuf,
        /// Maximum number of live reservations.
        #[arg(long, default_value_t = MAX_RESERVATIONS)]
        capacity: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_graph(&cli)?;
    let format = cli.format;

    match cli.command {
        Command::Cities { served } => commands::network::handle_cities(&graph, served, format),
        Command::Departures { city } => commands::network::handle_departures(&graph, &city, format),
        Command::Arrivals { city } => commands::network::handle_arrivals(&graph, &city, format),
        Command::Reachable { city } => commands::network::handle_reachable(&graph, &city, format),
        Command::Path { from, to } => commands::route::handle_path(&graph, &from, &to, format),
        Command::Route { from, to } => commands::route::handle_route(&graph, &from, &to, format),
        Command::Book { script, capacity } => {
            commands::book::handle_book(&graph, &script, capacity, format)
        }
    }
}

fn load_graph(cli: &Cli) -> Result<FlightGraph> {
    resolve_network(cli.network.as_deref()).with_context(|| match &cli.network {
        Some(path) => format!("failed to load network from {}", path.display()),
        None => "failed to load the configured flight network".to_string(),
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
