//! Common types for address-lookup.
//!
//! The `Raw*` and `*Response` types mirror the place service's snake_case
//! JSON and derive [`serde::Deserialize`] so a transport implementation can
//! hand payloads straight to the core. [`Prediction`] and [`AddressDetail`]
//! are this crate's own shapes: what the view renders and what the
//! containing component receives.

use serde::{Deserialize, Serialize};

/// Optional geographic bias for suggestion queries.
///
/// Set at most once per [`Predictor`](crate::Predictor) instance, before the
/// first search. Absent coordinates leave queries unbiased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, if a reading was acquired
    pub latitude: Option<f64>,
    /// Longitude in degrees, if a reading was acquired
    pub longitude: Option<f64>,
}

impl Location {
    /// Create a location from a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// A matched range inside a prediction's main text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSubstring {
    /// Character offset of the match start
    pub offset: usize,
    /// Match length in characters
    pub length: usize,
}

/// Display formatting carried by a raw prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredFormatting {
    /// First display line, usually the street-level part
    pub main_text: String,
    /// Second display line, usually locality and country
    #[serde(default)]
    pub secondary_text: String,
    /// Ranges of `main_text` that matched the query
    #[serde(default)]
    pub main_text_matched_substrings: Vec<MatchedSubstring>,
}

/// One candidate place as returned by the suggestion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Service identifier for the place, used to fetch details
    pub place_id: String,
    /// Full single-line description of the candidate
    pub description: String,
    /// Display formatting and match metadata
    pub structured_formatting: StructuredFormatting,
}

/// Envelope for a suggestion response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Candidate places in service ranking order
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
}

/// A display-ready suggestion row.
///
/// Derived 1:1 from [`RawPrediction`]; at most
/// [`MAX_PREDICTIONS`](crate::presenter::MAX_PREDICTIONS) are kept per
/// search, in response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Row key, the service's place identifier
    pub key: String,
    /// First display line
    pub main_text: String,
    /// Second display line
    pub secondary_text: String,
    /// Ranges of `main_text` that matched the query
    pub main_text_matched_substrings: Vec<MatchedSubstring>,
}

/// One semantically-typed fragment of a resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full name of the component (e.g. "California")
    pub long_name: String,
    /// Abbreviated name of the component (e.g. "CA")
    pub short_name: String,
    /// Semantic tags for the component; empty means the record is malformed
    #[serde(default)]
    pub types: Vec<String>,
}

/// The resolved place inside a details response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Typed fragments that make up the address
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Envelope for a place-details response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetailsResponse {
    /// The resolved place, absent when the service found nothing
    pub result: Option<PlaceResult>,
}

/// The final structured address handed to the consuming application.
///
/// `street` and `postal_code` are derived fields and always present, though
/// possibly empty. All other fields pass through from the service and may be
/// absent; consumers must not assume any particular one is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDetail {
    /// House/street number (e.g. "221B")
    pub street_number: Option<String>,
    /// Street name (e.g. "Baker St")
    pub route: Option<String>,
    /// Derived street line: number and route joined with a space
    pub street: String,
    /// City or locality
    pub city: Option<String>,
    /// State or top-level administrative area, abbreviated
    pub state: Option<String>,
    /// Country, full name
    pub country: Option<String>,
    /// Postal code, with the suffix appended when one was present
    pub postal_code: String,
    /// Postal code suffix (e.g. the "1234" of "94105-1234")
    pub postal_code_suffix: Option<String>,
}
