use std::collections::HashMap;

use axum::http::StatusCode;
use praedex::{listing::CategoryFilter, shared::Coordinate};
use tracing::debug;

pub const REF_LAT: &str = "refLat";
pub const REF_LNG: &str = "refLng";

/// Reads the reference coordinate. Both parameters absent is `None`,
/// anything partial, non-numeric or out of range is a bad request.
pub fn reference_from_params(
    params: &HashMap<String, String>,
) -> Result<Option<Coordinate>, StatusCode> {
    match (params.get(REF_LAT), params.get(REF_LNG)) {
        (None, None) => Ok(None),
        (Some(latitude), Some(longitude)) => {
            let latitude: f64 = latitude
                .trim()
                .parse()
                .map_err(|_| StatusCode::BAD_REQUEST)?;
            let longitude: f64 = longitude
                .trim()
                .parse()
                .map_err(|_| StatusCode::BAD_REQUEST)?;
            let coordinate = Coordinate::new(latitude, longitude).map_err(|err| {
                debug!("Rejected reference: {err}");
                StatusCode::BAD_REQUEST
            })?;
            Ok(Some(coordinate))
        }
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

pub fn required_reference(params: &HashMap<String, String>) -> Result<Coordinate, StatusCode> {
    reference_from_params(params)?.ok_or(StatusCode::BAD_REQUEST)
}

pub fn category_from_params(
    params: &HashMap<String, String>,
) -> Result<CategoryFilter, StatusCode> {
    match params.get("category") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(CategoryFilter::All),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn missing_reference_is_none() {
        assert_eq!(reference_from_params(&params(&[])), Ok(None));
        assert_eq!(
            required_reference(&params(&[])),
            Err(StatusCode::BAD_REQUEST)
        );
    }

    #[test]
    fn partial_reference_is_rejected() {
        let result = reference_from_params(&params(&[(REF_LAT, "40.7")]));
        assert_eq!(result, Err(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn non_numeric_or_out_of_range_reference_is_rejected() {
        let result = reference_from_params(&params(&[(REF_LAT, "north"), (REF_LNG, "-74")]));
        assert_eq!(result, Err(StatusCode::BAD_REQUEST));
        let result = reference_from_params(&params(&[(REF_LAT, "91"), (REF_LNG, "-74")]));
        assert_eq!(result, Err(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn category_defaults_to_all() {
        assert_eq!(category_from_params(&params(&[])), Ok(CategoryFilter::All));
        assert_eq!(
            category_from_params(&params(&[("category", "castles")])),
            Err(StatusCode::BAD_REQUEST)
        );
    }
}
