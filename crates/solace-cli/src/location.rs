//! Environment-backed location provider.
//!
//! The CLI has no positioning hardware; `SOLACE_LOCATION="lat,lng"`
//! stands in for a platform provider. Unset means unavailable, which
//! commands report and move on from; location is always optional.

use solace_core::location::{Coordinates, LocationError, LocationProvider};

pub const LOCATION_ENV: &str = "SOLACE_LOCATION";

#[derive(Debug, Default)]
pub struct EnvLocationProvider;

impl LocationProvider for EnvLocationProvider {
    fn request_position(&mut self) -> Result<Coordinates, LocationError> {
        let raw = std::env::var(LOCATION_ENV).map_err(|_| LocationError::Unavailable)?;
        parse_coordinates(&raw).ok_or_else(|| {
            LocationError::Failed(format!("Invalid {} value: {}", LOCATION_ENV, raw))
        })
    }
}

fn parse_coordinates(raw: &str) -> Option<Coordinates> {
    let (lat, lng) = raw.split_once(',')?;
    Some(Coordinates {
        lat: lat.trim().parse().ok()?,
        lng: lng.trim().parse().ok()?,
    })
}
