// SPDX-License-Identifier: MPL-2.0
//! Controllers turning user input into gateway calls and state updates.
//!
//! - [`pipeline`]: token-guarded click state machine
//! - [`map`]: map clicks, reverse geocoding, place details and photo downloads
//! - [`search`]: autocomplete input and forward geocoding of selections

pub mod map;
pub mod pipeline;
pub mod search;

pub use map::{DetailsOutcome, GeocodeOutcome, MapController, PhotoDownload};
pub use pipeline::{ClickPipeline, PipelinePhase, PipelineStep, PipelineToken};
pub use search::{SearchController, SearchOutcome, SearchRequest};
