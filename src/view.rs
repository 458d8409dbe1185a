//! The view-signal boundary.

/// Signals the [`Predictor`](crate::Predictor) sends to its results panel.
///
/// The view is injected rather than looked up, so the prediction pipeline
/// can be exercised without any real UI. Implementations must satisfy one
/// ordering contract: a row is materialized by the time [`set_row_text`]
/// returns, and [`open_results`] is only signaled after every row of the
/// current list has been populated and the default focus applied. This
/// replaces the render-timing pause some widgets use.
///
/// [`set_row_text`]: ResultsView::set_row_text
/// [`open_results`]: ResultsView::open_results
pub trait ResultsView {
    /// Show the results panel.
    fn open_results(&mut self);

    /// Hide the results panel.
    fn close_results(&mut self);

    /// Create or update the row for `key` with highlighted display markup.
    ///
    /// Call order is render order; matched query ranges arrive wrapped in
    /// `<strong>` markers.
    fn set_row_text(&mut self, key: &str, markup: &str);

    /// Mark the row for `key` as the focused result.
    fn focus_row(&mut self, key: &str);

    /// Clear the focus marker from every row, deferring to hover styling.
    fn clear_focus(&mut self);
}
