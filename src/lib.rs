//! # address-lookup
//!
//! The core pipeline of an address-autocomplete widget: shape ranked place
//! suggestions as the user types, highlight the matched parts of each
//! candidate, and resolve a selected candidate into a normalized structured
//! address.
//!
//! The crate deliberately owns only the logic-bearing middle of the widget.
//! Transport to the place service and the visual panel are injected through
//! two small traits, so the whole pipeline runs and tests without a network
//! or a UI.
//!
//! ## Features
//!
//! - **Suggestion shaping**: at most five candidates per search, service
//!   ranking preserved
//! - **Match highlighting**: offset-based splicing, so repeated substrings
//!   always bold the right occurrence
//! - **Address normalization**: typed components to a flat structured
//!   address with derived street and postal-code fields
//! - **Injected collaborators**: [`PlaceService`] for the remote side,
//!   [`ResultsView`] for the panel, a plain closure for the selection event
//! - **Non-fatal failures**: every fetch or payload problem is logged and
//!   absorbed; the next keystroke starts fresh
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use address_lookup::{
//!     Location, PlaceDetailsResponse, PlaceService, Predictor, Result,
//!     ResultsView, SuggestionsResponse,
//! };
//!
//! struct HttpService; // wraps your transport of choice
//!
//! impl PlaceService for HttpService {
//!     async fn fetch_suggestions(
//!         &self,
//!         input: &str,
//!         location: Location,
//!     ) -> Result<Option<SuggestionsResponse>> {
//!         todo!("call the place service")
//!     }
//!
//!     async fn fetch_place_details(
//!         &self,
//!         place_id: &str,
//!     ) -> Result<Option<PlaceDetailsResponse>> {
//!         todo!("call the place service")
//!     }
//! }
//!
//! struct PanelView; // forwards signals to your UI toolkit
//!
//! impl ResultsView for PanelView {
//!     fn open_results(&mut self) {}
//!     fn close_results(&mut self) {}
//!     fn set_row_text(&mut self, key: &str, markup: &str) {}
//!     fn focus_row(&mut self, key: &str) {}
//!     fn clear_focus(&mut self) {}
//! }
//!
//! # async fn demo() {
//! let mut predictor = Predictor::new(HttpService, PanelView)
//!     .with_selection_listener(|address| println!("selected: {}", address.street));
//!
//! predictor.on_input_changed("123 Main").await;
//! // ... user picks a row ...
//! predictor.on_result_selected("some-place-id").await;
//! # }
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod normalizer;
pub mod predictor;
pub mod presenter;
pub mod service;
pub mod types;
pub mod view;

// Re-export main API
pub use error::{Error, Result};
pub use normalizer::AddressNormalizer;
pub use predictor::Predictor;
pub use service::PlaceService;
pub use types::*;
pub use view::ResultsView;
