//! Prediction-and-resolution orchestration.

use tracing::{debug, error, warn};

use crate::normalizer::AddressNormalizer;
use crate::presenter;
use crate::service::PlaceService;
use crate::types::{AddressDetail, Location, Prediction};
use crate::view::ResultsView;

/// Orchestrates the autocomplete pipeline for one input widget.
///
/// A `Predictor` owns the per-instance state (bias location, current
/// prediction list, empty-result flag) and drives the flow from keystroke to
/// the final structured address: fetch suggestions through the injected
/// [`PlaceService`], shape and highlight them for the injected
/// [`ResultsView`], and on selection resolve the chosen place into an
/// [`AddressDetail`] handed to the selection listener.
///
/// No operation here is fatal: fetch failures and empty payloads are logged
/// and leave the stored state untouched, so the next keystroke or click
/// starts a fresh attempt.
pub struct Predictor<S, V> {
    service: S,
    view: V,
    normalizer: AddressNormalizer,
    location: Location,
    predictions: Vec<Prediction>,
    no_predictions: bool,
    selection_listener: Option<Box<dyn FnMut(AddressDetail)>>,
}

impl<S: PlaceService, V: ResultsView> Predictor<S, V> {
    /// Create a predictor over a place service and a results view.
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view,
            normalizer: AddressNormalizer::new(),
            location: Location::default(),
            predictions: Vec::new(),
            no_predictions: false,
            selection_listener: None,
        }
    }

    /// Register the listener invoked once per successfully resolved address.
    ///
    /// The listener is the predictor's single outbound event; it never fires
    /// for a failed fetch, an empty details payload, or an empty component
    /// list.
    pub fn with_selection_listener(
        mut self,
        listener: impl FnMut(AddressDetail) + 'static,
    ) -> Self {
        self.selection_listener = Some(Box::new(listener));
        self
    }

    /// Store the bias location used by subsequent searches.
    ///
    /// Intended to be called at most once, when the geolocation collaborator
    /// yields a reading; without it searches proceed unbiased.
    pub fn on_location_acquired(&mut self, location: Location) {
        self.location = location;
    }

    /// Handle a change of the input text.
    ///
    /// An empty value clears the stored predictions and closes the results
    /// panel without touching the service; anything else runs a search. Each
    /// call performs at most one fetch.
    pub async fn on_input_changed(&mut self, value: &str) {
        if value.is_empty() {
            self.predictions.clear();
            self.no_predictions = false;
            self.view.close_results();
        } else {
            self.search(value).await;
        }
    }

    /// Fetch, shape, and present suggestions for a non-empty input.
    ///
    /// A response with candidates replaces the stored list (capped at
    /// [`MAX_PREDICTIONS`](presenter::MAX_PREDICTIONS)) and opens the panel
    /// with the first row focused. A response with no candidates only sets
    /// the no-predictions flag, keeping the last good list on screen. A
    /// rejected fetch changes nothing.
    pub async fn search(&mut self, value: &str) {
        let response = match self.service.fetch_suggestions(value, self.location).await {
            Ok(response) => response,
            Err(err) => {
                error!(%err, "suggestion fetch failed");
                return;
            }
        };

        let raw = response.map(|r| r.predictions).unwrap_or_default();
        if raw.is_empty() {
            debug!(input = %value, "no predictions for input");
            self.no_predictions = true;
            return;
        }

        self.no_predictions = false;
        self.predictions = presenter::shape_predictions(&raw);
        debug!(count = self.predictions.len(), "presenting predictions");
        self.present();
    }

    /// Push the current list to the view: row markup in render order, then
    /// the default focus, then the open signal.
    fn present(&mut self) {
        let Self {
            predictions, view, ..
        } = self;
        for prediction in predictions.iter() {
            let markup = presenter::highlight_main_text(prediction);
            view.set_row_text(&prediction.key, &markup);
        }
        if let Some(key) = presenter::default_focus(predictions) {
            view.focus_row(key);
        }
        view.open_results();
    }

    /// Handle the pointer entering a result row.
    ///
    /// Clears the default focus marker from every row so hover styling takes
    /// over; idempotent.
    pub fn on_result_hovered(&mut self) {
        self.view.clear_focus();
    }

    /// Handle the user picking a result row.
    ///
    /// Resolves the place behind `key`, then discards the now-consumed
    /// prediction list and closes the panel. The next keystroke starts over.
    pub async fn on_result_selected(&mut self, key: &str) {
        self.get_detail(key).await;
        self.predictions.clear();
        self.view.close_results();
    }

    /// Resolve a place into a structured address and notify the listener.
    ///
    /// Nothing is emitted for a rejected fetch, a payload without a result,
    /// or a result whose components cannot be normalized.
    pub async fn get_detail(&mut self, key: &str) {
        let response = match self.service.fetch_place_details(key).await {
            Ok(response) => response,
            Err(err) => {
                error!(%err, "place details fetch failed");
                return;
            }
        };

        let Some(result) = response.and_then(|r| r.result) else {
            warn!(place_id = %key, "place details response carried no result");
            return;
        };

        match self.normalizer.normalize(&result.address_components) {
            Ok(detail) => {
                debug!(street = %detail.street, "address resolved");
                if let Some(listener) = self.selection_listener.as_mut() {
                    listener(detail);
                }
            }
            Err(err) => warn!(%err, place_id = %key, "address normalization failed"),
        }
    }

    /// Handle the input losing focus: close the panel, keep the stored
    /// predictions so a later click can reopen without refetching.
    pub fn on_blur(&mut self) {
        self.view.close_results();
    }

    /// Handle a click on the input: reopen the panel if predictions from an
    /// earlier search are still stored. No refetch.
    pub fn on_input_click(&mut self) {
        if !self.predictions.is_empty() {
            self.view.open_results();
        }
    }

    /// The currently stored predictions, at most
    /// [`MAX_PREDICTIONS`](presenter::MAX_PREDICTIONS) in response order.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Whether the last search answered with zero candidates.
    pub fn no_predictions(&self) -> bool {
        self.no_predictions
    }

    /// The stored bias location.
    pub fn location(&self) -> Location {
        self.location
    }
}
