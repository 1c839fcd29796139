#![forbid(unsafe_code)]
//! what3words integration
//!
//! Client for the what3words v3 API (<https://developer.what3words.com>):
//! coordinate <-> three-word address conversion, grid sections, language
//! listing, autosuggest, and confirmation of candidate addresses.
//!
//! # Architecture
//!
//! The endpoint surface is defined by the [`W3wClient`] trait and
//! implemented by the reqwest-based [`Geocoder`]. Address confirmation
//! ([`is_valid_3wa`]) is generic over the trait: it gates on the offline
//! lexical grammar from the `domain` crate and only then asks autosuggest
//! for a single candidate.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_what3words::{Geocoder, W3wClient, W3wConfig};
//!
//! let config = W3wConfig {
//!     api_key: Some(std::env::var("W3W_API_KEY")?),
//!     ..Default::default()
//! };
//! let geocoder = Geocoder::new(&config)?;
//!
//! let address = geocoder.convert_to_coordinates("filled.count.soap").await?;
//! println!("{} -> {}", address.words, address.coordinates);
//!
//! assert!(geocoder.is_valid_3wa("filled.count.soap").await?);
//! ```

mod client;
mod config;
mod confirm;
mod error;
mod models;

pub use client::{Geocoder, W3wClient};
pub use config::W3wConfig;
pub use confirm::is_valid_3wa;
pub use error::W3wError;
pub use models::{
    Address, AutosuggestOptions, AutosuggestResponse, AvailableLanguages, GridLine, GridSection,
    Language, Suggestion,
};
