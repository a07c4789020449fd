use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

/// Snapshot of everything the store knows about an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub current: Option<Coordinates>,
    pub target: Option<Coordinates>,
    pub mode: Option<TravelMode>,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.target.is_none() && self.mode.is_none()
    }
}

/// Named fields of an order in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Current,
    Target,
    Mode,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Target => "target",
            Self::Mode => "mode",
        }
    }
}

/// Which of the two points an update refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Current,
    Target,
}

impl From<LocationKind> for Field {
    fn from(kind: LocationKind) -> Self {
        match kind {
            LocationKind::Current => Field::Current,
            LocationKind::Target => Field::Target,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    #[default]
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(invalid_input_error(format!(
                "unsupported travel mode: {}",
                value
            ))),
        }
    }
}

#[test]
fn travel_mode_defaults_to_walking() {
    assert_eq!(TravelMode::default(), TravelMode::Walking);
}

#[test]
fn travel_mode_parses_names() {
    for mode in [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
    ] {
        assert_eq!(mode.name().parse::<TravelMode>().unwrap(), mode);
    }

    assert_eq!("DRIVING".parse::<TravelMode>().unwrap(), TravelMode::Driving);
    assert!("flying".parse::<TravelMode>().is_err());
}

#[test]
fn travel_mode_serde_matches_store_names() {
    let json = serde_json::to_string(&TravelMode::Bicycling).unwrap();
    assert_eq!(json, "\"bicycling\"");

    let mode: TravelMode = serde_json::from_str("\"transit\"").unwrap();
    assert_eq!(mode, TravelMode::Transit);
}
