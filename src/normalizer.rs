//! Address normalization: component list to structured address.

use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{AddressComponent, AddressDetail};

/// Turns a resolved place's typed components into an [`AddressDetail`].
///
/// Normalization is a pure transformation: the input is never mutated and
/// equal inputs always produce equal output. Each component type maps to at
/// most one field; unlisted types are ignored and a component with no types
/// is skipped with a warning while its siblings are still processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressNormalizer;

impl AddressNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a component list into a structured address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyComponents`] when the list is empty; callers
    /// treat this as "nothing to report", not a failure of the widget.
    ///
    /// # Example
    ///
    /// ```rust
    /// use address_lookup::{AddressComponent, AddressNormalizer};
    ///
    /// let components = vec![
    ///     AddressComponent {
    ///         long_name: "221B".into(),
    ///         short_name: "221B".into(),
    ///         types: vec!["street_number".into()],
    ///     },
    ///     AddressComponent {
    ///         long_name: "Baker St".into(),
    ///         short_name: "Baker St".into(),
    ///         types: vec!["route".into()],
    ///     },
    /// ];
    ///
    /// let detail = AddressNormalizer::new().normalize(&components)?;
    /// assert_eq!(detail.street, "221B Baker St");
    /// # Ok::<(), address_lookup::Error>(())
    /// ```
    pub fn normalize(&self, components: &[AddressComponent]) -> Result<AddressDetail> {
        if components.is_empty() {
            return Err(Error::EmptyComponents);
        }

        let mut detail = AddressDetail::default();
        for component in components {
            if component.types.is_empty() {
                warn!(
                    long_name = %component.long_name,
                    "address component carries no types, skipping"
                );
                continue;
            }
            for component_type in &component.types {
                Self::apply(&mut detail, component_type, component);
            }
        }

        Self::derive_street(&mut detail);
        Self::append_postal_suffix(&mut detail);
        Ok(detail)
    }

    /// Apply one type rule to the detail under construction.
    fn apply(detail: &mut AddressDetail, component_type: &str, component: &AddressComponent) {
        match component_type {
            "street_number" => detail.street_number = Some(component.long_name.clone()),
            "route" => detail.route = Some(component.long_name.clone()),
            "locality" => detail.city = Some(component.long_name.clone()),
            // A sublocality names the city slot and, in the source data, its
            // enclosing administrative area as well, so it fills both city
            // and state from the one component.
            "sublocality_level_1" => {
                detail.city = Some(component.long_name.clone());
                detail.state = Some(component.short_name.clone());
            }
            "administrative_area_level_1" => detail.state = Some(component.short_name.clone()),
            "country" => detail.country = Some(component.long_name.clone()),
            "postal_code" => detail.postal_code = component.long_name.clone(),
            "postal_code_suffix" => {
                detail.postal_code_suffix = Some(component.long_name.clone());
            }
            _ => {}
        }
    }

    /// Street is always computed, never taken from a component directly.
    fn derive_street(detail: &mut AddressDetail) {
        detail.street = match (&detail.street_number, &detail.route) {
            (Some(number), Some(route)) => format!("{number} {route}"),
            (Some(number), None) => number.clone(),
            (None, Some(route)) => route.clone(),
            (None, None) => String::new(),
        };
    }

    fn append_postal_suffix(detail: &mut AddressDetail) {
        if let Some(suffix) = &detail.postal_code_suffix {
            detail.postal_code = format!("{}-{}", detail.postal_code, suffix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn component(long_name: &str, short_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_components_rejected() {
        let result = AddressNormalizer::new().normalize(&[]);
        assert_matches!(result, Err(Error::EmptyComponents));
    }

    #[test]
    fn test_full_resolution_scenario() {
        let components = vec![
            component("221B", "221B", &["street_number"]),
            component("Baker St", "Baker St", &["route"]),
            component("London", "London", &["locality"]),
            component("UK", "GB", &["country"]),
        ];

        let detail = AddressNormalizer::new().normalize(&components).unwrap();
        assert_eq!(detail.street_number.as_deref(), Some("221B"));
        assert_eq!(detail.route.as_deref(), Some("Baker St"));
        assert_eq!(detail.street, "221B Baker St");
        assert_eq!(detail.city.as_deref(), Some("London"));
        assert_eq!(detail.country.as_deref(), Some("UK"));
        assert_eq!(detail.postal_code, "");
        assert!(detail.state.is_none());
    }

    #[test]
    fn test_street_derivation_variants() {
        let normalizer = AddressNormalizer::new();

        let both = normalizer
            .normalize(&[
                component("12", "12", &["street_number"]),
                component("Main St", "Main St", &["route"]),
            ])
            .unwrap();
        assert_eq!(both.street, "12 Main St");

        let number_only = normalizer
            .normalize(&[component("12", "12", &["street_number"])])
            .unwrap();
        assert_eq!(number_only.street, "12");

        let route_only = normalizer
            .normalize(&[component("Main St", "Main St", &["route"])])
            .unwrap();
        assert_eq!(route_only.street, "Main St");

        let neither = normalizer
            .normalize(&[component("London", "London", &["locality"])])
            .unwrap();
        assert_eq!(neither.street, "");
    }

    #[test]
    fn test_postal_code_suffix_concatenation() {
        let normalizer = AddressNormalizer::new();

        let with_suffix = normalizer
            .normalize(&[
                component("94105", "94105", &["postal_code"]),
                component("1234", "1234", &["postal_code_suffix"]),
            ])
            .unwrap();
        assert_eq!(with_suffix.postal_code, "94105-1234");
        assert_eq!(with_suffix.postal_code_suffix.as_deref(), Some("1234"));

        let without_suffix = normalizer
            .normalize(&[component("94105", "94105", &["postal_code"])])
            .unwrap();
        assert_eq!(without_suffix.postal_code, "94105");

        // No base code: the suffix still lands after the separator rather
        // than producing a placeholder artifact.
        let suffix_only = normalizer
            .normalize(&[component("1234", "1234", &["postal_code_suffix"])])
            .unwrap();
        assert_eq!(suffix_only.postal_code, "-1234");
    }

    #[test]
    fn test_sublocality_populates_city_and_state() {
        let components = vec![component("Brooklyn", "BK", &["sublocality_level_1"])];

        let detail = AddressNormalizer::new().normalize(&components).unwrap();
        assert_eq!(detail.city.as_deref(), Some("Brooklyn"));
        assert_eq!(detail.state.as_deref(), Some("BK"));
    }

    #[test]
    fn test_state_uses_short_name() {
        let components = vec![component(
            "California",
            "CA",
            &["administrative_area_level_1", "political"],
        )];

        let detail = AddressNormalizer::new().normalize(&components).unwrap();
        assert_eq!(detail.state.as_deref(), Some("CA"));
    }

    #[test]
    fn test_untyped_component_skipped_siblings_kept() {
        let components = vec![
            component("garbage", "garbage", &[]),
            component("London", "London", &["locality"]),
        ];

        let detail = AddressNormalizer::new().normalize(&components).unwrap();
        assert_eq!(detail.city.as_deref(), Some("London"));
    }

    #[test]
    fn test_unlisted_types_ignored() {
        let components = vec![component("Westminster", "Westminster", &["neighborhood"])];

        let detail = AddressNormalizer::new().normalize(&components).unwrap();
        assert_eq!(detail, AddressDetail::default());
    }

    #[test]
    fn test_normalize_is_pure() {
        let components = vec![
            component("12", "12", &["street_number"]),
            component("Main St", "Main St", &["route"]),
            component("94105", "94105", &["postal_code"]),
        ];
        let snapshot = components.clone();

        let normalizer = AddressNormalizer::new();
        let first = normalizer.normalize(&components).unwrap();
        let second = normalizer.normalize(&components).unwrap();

        assert_eq!(first, second);
        assert_eq!(components, snapshot);
    }
}
