use crate::geo::consts::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::geo::distance;
use crate::geo::error::GeoError;
use serde::{Deserialize, Serialize};

/// A point on the globe. Construction validates the ranges, so any `LatLng` in
/// the program is a real coordinate pair.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        // `contains` is false for NaN, so non-finite input is rejected here too.
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn distance_km(&self, other: &LatLng) -> u64 {
        distance::great_circle_distance_km(*self, *other)
    }
}

#[derive(Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = GeoError;

    fn try_from(raw: RawLatLng) -> Result<Self, Self::Error> {
        LatLng::new(raw.lat, raw.lng)
    }
}

/// A guessable place: a city for classic rounds or a fact for trivia rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation", into = "RawLocation")]
pub struct Location {
    pub name: String,
    pub position: LatLng,
    /// Label used when aggregating by country.
    pub country: String,
    /// Only set for trivia entries.
    pub hint: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RawLocation {
    name: String,
    lat: f64,
    lng: f64,
    country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl TryFrom<RawLocation> for Location {
    type Error = GeoError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Ok(Location {
            name: raw.name,
            position: LatLng::new(raw.lat, raw.lng)?,
            country: raw.country,
            hint: raw.hint,
        })
    }
}

impl From<Location> for RawLocation {
    fn from(location: Location) -> Self {
        RawLocation {
            name: location.name,
            lat: location.position.lat(),
            lng: location.position.lng(),
            country: location.country,
            hint: location.hint,
        }
    }
}
