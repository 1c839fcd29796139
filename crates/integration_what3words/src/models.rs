//! what3words v3 API data models

use domain::{BoundingBox, Circle, Coordinates};
use serde::{Deserialize, Serialize};

/// A resolved three-word address
///
/// Returned by both conversion endpoints; the payload is identical whichever
/// direction the conversion ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// ISO 3166-1 alpha-2 country code of the square
    pub country: String,

    /// The 3m x 3m square this address names
    pub square: BoundingBox,

    /// Nearest named place (e.g. "Bayswater, London")
    pub nearest_place: String,

    /// Centre of the square
    pub coordinates: Coordinates,

    /// The three-word address itself
    pub words: String,

    /// Language of the words (ISO 639-1 code)
    pub language: String,

    /// Link to the address on the what3words map
    pub map: String,
}

/// A single autosuggest candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The suggested three-word address
    pub words: String,

    /// ISO 3166-1 alpha-2 country code
    pub country: String,

    /// Nearest named place
    pub nearest_place: String,

    /// Ranking position, 1 is the best match
    pub rank: u32,

    /// Language of the words
    pub language: String,

    /// Distance from the focus coordinates, when a focus was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_focus_km: Option<f64>,
}

/// Response payload of the autosuggest endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutosuggestResponse {
    /// Ranked candidate addresses, best first; may be empty
    pub suggestions: Vec<Suggestion>,
}

/// A single grid line of a grid section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Start of the line
    pub start: Coordinates,

    /// End of the line
    pub end: Coordinates,
}

/// Response payload of the grid-section endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// The 3m x 3m grid lines covering the requested box
    pub lines: Vec<GridLine>,
}

/// A language the service can render addresses in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// ISO 639-1 code
    pub code: String,

    /// English name
    pub name: String,

    /// Name in the language itself
    pub native_name: String,
}

/// Response payload of the available-languages endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableLanguages {
    /// All supported address languages
    pub languages: Vec<Language>,
}

/// Options for autosuggest queries
///
/// Every field is optional; unset fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutosuggestOptions {
    /// Maximum number of suggestions to return (API default: 3)
    pub n_results: Option<u32>,

    /// Coordinates to bias ranking towards
    pub focus: Option<Coordinates>,

    /// How many of the results must be within 50km of the focus
    pub n_focus_results: Option<u32>,

    /// Comma-separated ISO 3166-1 alpha-2 codes to restrict results to
    pub clip_to_country: Option<String>,

    /// Restrict results to a bounding box
    pub clip_to_bounding_box: Option<BoundingBox>,

    /// Restrict results to a circle
    pub clip_to_circle: Option<Circle>,

    /// Prefer results on land over sea
    pub prefer_land: Option<bool>,

    /// Language to return suggestions in
    pub language: Option<String>,
}

impl AutosuggestOptions {
    /// Create new options with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of suggestions
    #[must_use]
    pub const fn with_n_results(mut self, n: u32) -> Self {
        self.n_results = Some(n);
        self
    }

    /// Set the focus coordinates
    #[must_use]
    pub const fn with_focus(mut self, focus: Coordinates) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Set the number of focus-bound results
    #[must_use]
    pub const fn with_n_focus_results(mut self, n: u32) -> Self {
        self.n_focus_results = Some(n);
        self
    }

    /// Restrict results to the given countries (comma-separated codes)
    #[must_use]
    pub fn with_clip_to_country(mut self, countries: impl Into<String>) -> Self {
        self.clip_to_country = Some(countries.into());
        self
    }

    /// Restrict results to a bounding box
    #[must_use]
    pub const fn with_clip_to_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.clip_to_bounding_box = Some(bounding_box);
        self
    }

    /// Restrict results to a circle
    #[must_use]
    pub const fn with_clip_to_circle(mut self, circle: Circle) -> Self {
        self.clip_to_circle = Some(circle);
        self
    }

    /// Prefer results on land over sea
    #[must_use]
    pub const fn with_prefer_land(mut self, prefer: bool) -> Self {
        self.prefer_land = Some(prefer);
        self
    }

    /// Set the suggestion language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Render the set options as query parameters
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(n) = self.n_results {
            pairs.push(("n-results", n.to_string()));
        }
        if let Some(focus) = self.focus {
            pairs.push(("focus", focus.to_string()));
        }
        if let Some(n) = self.n_focus_results {
            pairs.push(("n-focus-results", n.to_string()));
        }
        if let Some(ref countries) = self.clip_to_country {
            pairs.push(("clip-to-country", countries.clone()));
        }
        if let Some(bounding_box) = self.clip_to_bounding_box {
            pairs.push(("clip-to-bounding-box", bounding_box.to_string()));
        }
        if let Some(circle) = self.clip_to_circle {
            pairs.push(("clip-to-circle", circle.to_string()));
        }
        if let Some(prefer) = self.prefer_land {
            pairs.push(("prefer-land", prefer.to_string()));
        }
        if let Some(ref language) = self.language {
            pairs.push(("language", language.clone()));
        }

        pairs
    }
}
