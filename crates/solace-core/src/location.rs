//! Geolocation boundary.
//!
//! Position acquisition lives outside the core: a provider either yields
//! a coordinate or fails, one outstanding request at a time, no
//! streaming. The capture guard closes the stale-result race: a result
//! is applied only while its ticket is still the current one, so a slow
//! callback can never land on the wrong entry or resurrect a location
//! after the entry was already saved.

use thiserror::Error;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Why a position request yielded nothing.
#[derive(Debug, Error)]
pub enum LocationError {
    /// No provider is available on this host
    #[error("No location provider is available")]
    Unavailable,

    /// The provider failed or denied the request
    #[error("Position acquisition failed: {0}")]
    Failed(String),
}

/// Single-shot position source.
pub trait LocationProvider {
    /// Request the current position.
    fn request_position(&mut self) -> Result<Coordinates, LocationError>;
}

/// Ticket identifying one position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTicket(u64);

/// Generation guard for position requests.
///
/// `begin` hands out a fresh ticket and retires every earlier one;
/// `invalidate` retires the current ticket without issuing a new one,
/// for when the target entry has been saved and a late result must be
/// dropped rather than applied retroactively.
#[derive(Debug, Default)]
pub struct LocationCapture {
    generation: u64,
    active: bool,
}

impl LocationCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new capture, superseding any outstanding ticket.
    pub fn begin(&mut self) -> LocationTicket {
        self.generation += 1;
        self.active = true;
        LocationTicket(self.generation)
    }

    /// Whether a result carrying this ticket may still be applied.
    pub fn accepts(&self, ticket: LocationTicket) -> bool {
        self.active && ticket.0 == self.generation
    }

    /// Retire the current ticket.
    pub fn invalidate(&mut self) {
        self.active = false;
    }
}
