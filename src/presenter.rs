//! Result shaping and highlighting.
//!
//! Pure functions between the wire records and the view: truncate the
//! service's candidate list to a displayable size, build the highlighted
//! markup for each row, and pick the default-focused row.

use crate::types::{Prediction, RawPrediction};

/// Maximum number of predictions surfaced per search.
pub const MAX_PREDICTIONS: usize = 5;

/// Shape raw service candidates into display-ready predictions.
///
/// Maps 1:1 in response order and stops after [`MAX_PREDICTIONS`] entries;
/// the service's ranking is trusted, never resampled.
pub fn shape_predictions(raw: &[RawPrediction]) -> Vec<Prediction> {
    raw.iter()
        .take(MAX_PREDICTIONS)
        .map(|prediction| Prediction {
            key: prediction.place_id.clone(),
            main_text: prediction.structured_formatting.main_text.clone(),
            secondary_text: prediction.structured_formatting.secondary_text.clone(),
            main_text_matched_substrings: prediction
                .structured_formatting
                .main_text_matched_substrings
                .clone(),
        })
        .collect()
}

/// Build display markup for a prediction's main text.
///
/// Every matched range is wrapped in `<strong>` markers by splicing at the
/// reported character offsets, so repeated substrings always get the right
/// occurrence bolded. Ranges are applied in offset order; a range that
/// starts inside an already-emitted one is dropped, and a range running past
/// the end of the text is clamped.
pub fn highlight_main_text(prediction: &Prediction) -> String {
    let chars: Vec<char> = prediction.main_text.chars().collect();

    let mut ranges: Vec<(usize, usize)> = prediction
        .main_text_matched_substrings
        .iter()
        .filter(|m| m.length > 0 && m.offset < chars.len())
        .map(|m| (m.offset, m.offset.saturating_add(m.length).min(chars.len())))
        .collect();
    ranges.sort_unstable();

    let mut markup = String::with_capacity(prediction.main_text.len());
    let mut cursor = 0;
    for (start, end) in ranges {
        if start < cursor {
            continue;
        }
        markup.extend(&chars[cursor..start]);
        markup.push_str("<strong>");
        markup.extend(&chars[start..end]);
        markup.push_str("</strong>");
        cursor = end;
    }
    markup.extend(&chars[cursor..]);
    markup
}

/// Key of the row focused by default when a results panel opens.
///
/// Always the first entry in render order. Hovering clears all focus
/// markers, so default focus and hover highlighting never coexist.
pub fn default_focus(predictions: &[Prediction]) -> Option<&str> {
    predictions.first().map(|prediction| prediction.key.as_str())
}
