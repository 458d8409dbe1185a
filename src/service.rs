//! The remote collaborator boundary.

use crate::error::Result;
use crate::types::{Location, PlaceDetailsResponse, SuggestionsResponse};

/// Remote place-suggestion and place-details operations.
///
/// Implementations own transport, authentication, and timeouts; the core
/// never retries and never cancels an in-flight call. Both operations return
/// `Ok(None)` when the service answered but carried no payload, which the
/// [`Predictor`](crate::Predictor) treats as an empty result rather than a
/// failure.
#[allow(async_fn_in_trait)]
pub trait PlaceService {
    /// Fetch suggestion candidates for a partial address input.
    ///
    /// `location` biases the ranking when its coordinates are present;
    /// an empty [`Location`] requests unbiased results.
    async fn fetch_suggestions(
        &self,
        input: &str,
        location: Location,
    ) -> Result<Option<SuggestionsResponse>>;

    /// Fetch the resolved details for a previously suggested place.
    async fn fetch_place_details(&self, place_id: &str) -> Result<Option<PlaceDetailsResponse>>;
}
