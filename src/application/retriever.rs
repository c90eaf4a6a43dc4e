// SPDX-License-Identifier: MPL-2.0
//! Screen state for the pick-and-locate flow.
//!
//! [`Retriever`] owns the three pieces of state the screen renders (the
//! selected image, its location and the last error) and applies
//! [`LocateOutcome`]s to them. Every run is tagged with a [`Ticket`]; only the
//! completion of the most recent run is applied, so overlapping taps cannot
//! overwrite a newer result with an older one.

use super::locator::{LocateError, LocateOutcome};
use crate::domain::{AssetInfo, Location, SelectedImage};

/// Sequence number of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Retriever {
    selected_image: Option<SelectedImage>,
    location: Option<Location>,
    error: Option<LocateError>,
    last_asset: Option<AssetInfo>,
    latest_ticket: u64,
    in_flight: bool,
}

impl Retriever {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run and returns its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest_ticket += 1;
        self.in_flight = true;
        Ticket(self.latest_ticket)
    }

    /// Applies the outcome of the run identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) if a newer run has started since.
    pub fn complete(&mut self, ticket: Ticket, outcome: LocateOutcome) -> bool {
        if ticket.0 != self.latest_ticket {
            log::warn!(
                "Discarding stale locate result #{} (latest is #{})",
                ticket.0,
                self.latest_ticket
            );
            return false;
        }
        self.in_flight = false;
        self.apply(outcome);
        true
    }

    fn apply(&mut self, outcome: LocateOutcome) {
        if let Some(image) = outcome.image {
            self.selected_image = Some(image);
            // A location always belongs to the image it was read from.
            self.location = None;
        }
        if outcome.asset.is_some() {
            self.last_asset = outcome.asset;
        }

        match outcome.result {
            Ok(location) => {
                self.location = Some(location);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Location line as displayed, e.g. `Latitude: 37.0, Longitude: -122.0`.
    #[must_use]
    pub fn location_text(&self) -> Option<String> {
        self.location.map(|l| l.to_string())
    }

    #[must_use]
    pub fn error(&self) -> Option<&LocateError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub fn last_asset(&self) -> Option<&AssetInfo> {
        self.last_asset.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}
