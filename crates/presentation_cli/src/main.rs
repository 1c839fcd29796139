//! what3words CLI
//!
//! Command-line interface for the what3words client: conversions, grid
//! sections, autosuggest, and offline validation of candidate addresses.

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use domain::{BoundingBox, Coordinates, did_you_mean_3wa, find_possible_3wa, is_possible_3wa};
use integration_what3words::{AutosuggestOptions, Geocoder, W3wClient, W3wConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// what3words CLI
#[derive(Parser)]
#[command(name = "w3w-cli")]
#[command(author, version, about = "what3words geocoding CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// what3words API key (offline commands work without one)
    #[arg(short = 'k', long, env = "W3W_API_KEY", global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a three-word address to coordinates
    ToCoordinates {
        /// Three-word address, e.g. "filled.count.soap"
        words: String,
    },

    /// Convert coordinates to a three-word address
    ToWords {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Response language (ISO 639-1 code)
        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Retrieve the 3m x 3m grid lines covering a bounding box
    Grid {
        /// South-west corner latitude
        #[arg(allow_negative_numbers = true)]
        sw_lat: f64,

        /// South-west corner longitude
        #[arg(allow_negative_numbers = true)]
        sw_lng: f64,

        /// North-east corner latitude
        #[arg(allow_negative_numbers = true)]
        ne_lat: f64,

        /// North-east corner longitude
        #[arg(allow_negative_numbers = true)]
        ne_lng: f64,
    },

    /// List available address languages
    Languages,

    /// Suggest full addresses for a partial or misspelt input
    Autosuggest {
        /// Partial or misspelt three-word address
        input: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        n_results: Option<u32>,

        /// Restrict to countries (comma-separated ISO codes, e.g. "fr,de")
        #[arg(short, long)]
        clip_to_country: Option<String>,
    },

    /// Classify a candidate: lexical shape, near-miss shape, and (with an
    /// API key) whether it names a real registered square
    Validate {
        /// Candidate text
        text: String,
    },

    /// Scan text for every substring shaped like a three-word address
    Find {
        /// Text to scan
        text: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build a geocoder from the CLI-supplied API key
fn geocoder_from(api_key: Option<String>) -> anyhow::Result<Geocoder> {
    if api_key.is_none() {
        anyhow::bail!("an API key is required: pass --api-key or set W3W_API_KEY");
    }
    let config = W3wConfig {
        api_key,
        ..Default::default()
    };
    Ok(Geocoder::new(&config)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::ToCoordinates { words } => {
            let geocoder = geocoder_from(cli.api_key)?;
            let address = geocoder.convert_to_coordinates(&words).await?;
            print_json(&address)?;
        },

        Commands::ToWords { lat, lng, language } => {
            let geocoder = geocoder_from(cli.api_key)?;
            let coordinates = Coordinates::new(lat, lng)?;
            let address = geocoder.convert_to_3wa(coordinates, &language).await?;
            print_json(&address)?;
        },

        Commands::Grid {
            sw_lat,
            sw_lng,
            ne_lat,
            ne_lng,
        } => {
            let geocoder = geocoder_from(cli.api_key)?;
            let sw = Coordinates::new(sw_lat, sw_lng)?;
            let ne = Coordinates::new(ne_lat, ne_lng)?;
            let grid = geocoder.grid_section(BoundingBox::new(sw, ne)?).await?;
            print_json(&grid)?;
        },

        Commands::Languages => {
            let geocoder = geocoder_from(cli.api_key)?;
            let languages = geocoder.available_languages().await?;
            print_json(&languages)?;
        },

        Commands::Autosuggest {
            input,
            n_results,
            clip_to_country,
        } => {
            let geocoder = geocoder_from(cli.api_key)?;

            let mut options = AutosuggestOptions::new();
            if let Some(n) = n_results {
                options = options.with_n_results(n);
            }
            if let Some(countries) = clip_to_country {
                options = options.with_clip_to_country(countries);
            }

            let response = geocoder.autosuggest(&input, &options).await?;
            print_json(&response)?;
        },

        Commands::Validate { text } => {
            println!("possible:     {}", is_possible_3wa(&text));
            println!("did you mean: {}", did_you_mean_3wa(&text));

            if cli.api_key.is_some() {
                let geocoder = geocoder_from(cli.api_key)?;
                println!("registered:   {}", geocoder.is_valid_3wa(&text).await?);
            } else {
                println!("registered:   skipped (no API key configured)");
            }
        },

        Commands::Find { text } => {
            for candidate in find_possible_3wa(&text) {
                println!("{candidate}");
            }
        },
    }

    Ok(())
}
