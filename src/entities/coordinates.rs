use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{invalid_input_error, malformed_coordinate_error, Error};

/// A geographic point in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Range check for points arriving at the boundary. The store codec
    /// itself accepts any pair of numbers.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid_input_error("latitude must be within [-90, 90]"));
        }

        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(invalid_input_error("longitude must be within [-180, 180]"));
        }

        Ok(())
    }
}

// Store field representation, e.g. "37.100000,-122.100000". Also the
// origin/destination format expected by the directions API.
impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{:.6},{:.6}", coordinates.lat, coordinates.lng)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(',');

        let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => (lat.trim(), lng.trim()),
            _ => return Err(malformed_coordinate_error(value)),
        };

        let lat = lat
            .parse::<f64>()
            .map_err(|_| malformed_coordinate_error(value))?;
        let lng = lng
            .parse::<f64>()
            .map_err(|_| malformed_coordinate_error(value))?;

        Ok(Self { lat, lng })
    }
}

#[test]
fn encode_uses_six_fractional_digits() {
    let encoded: String = Coordinates::new(37.1, -122.1).into();
    assert_eq!(encoded, "37.100000,-122.100000");
}

#[test]
fn decode_round_trips_valid_points() {
    let points = [
        Coordinates::new(0.0, 0.0),
        Coordinates::new(37.123456, -122.654321),
        Coordinates::new(-90.0, 180.0),
        Coordinates::new(90.0, -180.0),
        Coordinates::new(-33.868820, 151.209296),
    ];

    for point in points {
        let encoded: String = point.into();
        let decoded: Coordinates = encoded.parse().unwrap();

        assert!((decoded.lat - point.lat).abs() < 1e-6, "{:?}", point);
        assert!((decoded.lng - point.lng).abs() < 1e-6, "{:?}", point);
    }
}

#[test]
fn decode_tolerates_whitespace() {
    let decoded: Coordinates = " 1.5 , -2.25 ".parse().unwrap();
    assert_eq!(decoded, Coordinates::new(1.5, -2.25));
}

#[test]
fn decode_rejects_malformed_values() {
    use crate::error::MALFORMED_COORDINATE;

    for value in ["", "1.0", "1.0,2.0,3.0", "a,b", "1.0;2.0", "1.0,"] {
        let err = value.parse::<Coordinates>().unwrap_err();
        assert_eq!(err.code, MALFORMED_COORDINATE, "{:?}", value);
    }
}

#[test]
fn decode_does_not_range_check() {
    let decoded: Coordinates = "123.0,456.0".parse().unwrap();
    assert_eq!(decoded, Coordinates::new(123.0, 456.0));
    assert!(decoded.validate().is_err());
}

#[test]
fn validate_bounds() {
    assert!(Coordinates::new(37.0, -122.0).validate().is_ok());
    assert!(Coordinates::new(90.5, 0.0).validate().is_err());
    assert!(Coordinates::new(0.0, -180.5).validate().is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
}
