// SPDX-License-Identifier: MPL-2.0
//! Click-to-photos pipeline state machine.
//!
//! ```text
//! Idle ──click──▶ AwaitingGeocode ──place──▶ AwaitingDetails ──photos──▶ Settled
//!   ▲                   │                          │
//!   └──── failure ──────┴──────── failure ─────────┘
//! ```
//!
//! Every click starts a new run tagged with a fresh [`PipelineToken`]. A
//! completion carrying any other token than the latest one is stale and is
//! discarded, so a slow response never overwrites the photos of a newer click.
//! In-flight requests are not cancelled; they simply lose the token check.

use crate::domain::error::ResolutionError;
use crate::domain::geo::GeoPoint;
use crate::domain::place::{PhotoReferenceList, PlaceIdentifier, PlaceState};
use std::fmt;

/// Sequence number of one pipeline run. Strictly increasing per pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PipelineToken(u64);

impl PipelineToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PipelineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the latest run currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelinePhase {
    #[default]
    Idle,
    AwaitingGeocode,
    AwaitingDetails(PlaceIdentifier),
    Settled,
}

/// What the caller must do after feeding a completion into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStep {
    /// Reverse geocoding succeeded; look up the photos of this place.
    FetchDetails(PlaceIdentifier),
    /// Photos were stored in the shared state.
    Settled,
    /// The run failed; report the cause to the user.
    Failed(ResolutionError),
    /// The completion belongs to a superseded run and was ignored.
    Stale,
}

/// Token-guarded state machine for the click path.
#[derive(Debug, Default)]
pub struct ClickPipeline {
    issued: u64,
    latest: Option<PipelineToken>,
    phase: PipelinePhase,
}

impl ClickPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run for a click at `point`.
    ///
    /// The marker moves immediately; photos stay as they are until the run
    /// settles.
    pub fn begin(&mut self, point: GeoPoint, state: &mut PlaceState) -> PipelineToken {
        self.issued += 1;
        let token = PipelineToken(self.issued);
        self.latest = Some(token);
        self.phase = PipelinePhase::AwaitingGeocode;
        state.marker = point;
        token
    }

    /// Feeds the reverse-geocoding completion of run `token`.
    pub fn on_geocoded(
        &mut self,
        token: PipelineToken,
        result: Result<PlaceIdentifier, ResolutionError>,
    ) -> PipelineStep {
        if !self.is_current(token) || self.phase != PipelinePhase::AwaitingGeocode {
            return PipelineStep::Stale;
        }

        match result {
            Ok(id) => {
                self.phase = PipelinePhase::AwaitingDetails(id.clone());
                PipelineStep::FetchDetails(id)
            }
            Err(err) => {
                self.phase = PipelinePhase::Idle;
                PipelineStep::Failed(err)
            }
        }
    }

    /// Feeds the place-details completion of run `token`.
    ///
    /// On success the photo list in `state` is replaced, even when empty.
    pub fn on_details(
        &mut self,
        token: PipelineToken,
        result: Result<PhotoReferenceList, ResolutionError>,
        state: &mut PlaceState,
    ) -> PipelineStep {
        if !self.is_current(token) || !matches!(self.phase, PipelinePhase::AwaitingDetails(_)) {
            return PipelineStep::Stale;
        }

        match result {
            Ok(photos) => {
                state.photos = photos;
                self.phase = PipelinePhase::Settled;
                PipelineStep::Settled
            }
            Err(err) => {
                self.phase = PipelinePhase::Idle;
                PipelineStep::Failed(err)
            }
        }
    }

    /// Returns whether `token` identifies the latest run.
    #[must_use]
    pub fn is_current(&self, token: PipelineToken) -> bool {
        self.latest == Some(token)
    }

    #[must_use]
    pub fn phase(&self) -> &PipelinePhase {
        &self.phase
    }

    #[must_use]
    pub fn latest(&self) -> Option<PipelineToken> {
        self.latest
    }
}
