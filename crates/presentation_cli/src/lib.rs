//! Transit mock CLI
//!
//! Argument definitions and command execution, shared by the binary and its
//! tests. Commands run in-process against the fixture-backed provider.

use std::path::PathBuf;

use application::TransportService;
use clap::{Parser, Subcommand};
use domain::{ItineraryRequest, RoutePreference, RouteQuery, TransportMode};
use serde::Serialize;
use tracing::debug;

/// Transit mock CLI
#[derive(Debug, Parser)]
#[command(name = "transit-mock-cli")]
#[command(author, version, about = "Query the mock transport data provider", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip the simulated provider latency
    #[arg(long)]
    pub no_delay: bool,

    /// Configuration file (defaults to ./config.toml or TRANSIT_MOCK_CONFIG)
    #[arg(short, long, env = "TRANSIT_MOCK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search routes between two places
    Route {
        /// Start label
        start: String,

        /// End label
        end: String,

        /// Route preference: fastest, cheapest or fewest
        #[arg(short, long, default_value = "fastest")]
        preference: RoutePreference,

        /// Transport mode: transit, bus, mtr or taxi
        #[arg(short, long, default_value = "transit")]
        mode: TransportMode,
    },

    /// List stops and points of interest around a coordinate
    #[command(allow_negative_numbers = true)]
    Nearby {
        /// Latitude
        lat: f64,

        /// Longitude
        lng: f64,
    },

    /// Solve an itinerary over the given stops
    Itinerary {
        /// Stops in visiting order
        #[arg(required = true)]
        stops: Vec<String>,

        /// Include sightseeing points of interest
        #[arg(short, long)]
        tourist: bool,

        /// Use the save entry point instead of solve
        #[arg(long)]
        save: bool,
    },

    /// Fetch GeoJSON features for a map layer
    GeoFeatures {
        /// Layer name
        #[arg(default_value = "")]
        layer: String,
    },

    /// Print a step-by-step text plan for the given places
    ItinerarySteps {
        /// Places in visiting order
        places: Vec<String>,
    },

    /// List stations of the MTR network map
    Stations,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Run a command and render its payload as pretty JSON
///
/// Payloads are serialized straight from their records so fields keep their
/// declaration order.
pub async fn execute(
    command: Commands,
    service: &TransportService,
) -> Result<String, serde_json::Error> {
    debug!(?command, "Executing command");

    match command {
        Commands::Route {
            start,
            end,
            preference,
            mode,
        } => {
            let query = RouteQuery::new(start, end, preference, mode);
            render(&service.search_route(&query).await)
        },
        Commands::Nearby { lat, lng } => render(&service.get_nearby(lat, lng).await),
        Commands::Itinerary {
            stops,
            tourist,
            save,
        } => {
            let request = ItineraryRequest::new(stops, tourist);
            let result = if save {
                service.save_itinerary(&request).await
            } else {
                service.solve_itinerary(&request).await
            };
            render(&result)
        },
        Commands::GeoFeatures { layer } => render(&service.fetch_geo_features(&layer).await),
        Commands::ItinerarySteps { places } => {
            render(&service.generate_itinerary_steps(&places))
        },
        Commands::Stations => render(&service.list_mtr_stations().await),
    }
}

fn render<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}
