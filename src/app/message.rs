// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::controller::{PipelineToken, SearchRequest};
use crate::application::port::Predictions;
use crate::domain::error::ResolutionError;
use crate::domain::geo::GeoPoint;
use crate::domain::place::{PhotoReferenceList, PlaceIdentifier};
use crate::ui::gallery::{self, Generation};
use crate::ui::map;
use crate::ui::notifications;
use crate::ui::search;
use bytes::Bytes;
use std::fmt;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; gateway completions carry the token or sequence number of the
/// request that produced them.
#[derive(Debug, Clone)]
pub enum Message {
    Map(map::Message),
    Search(search::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    ReverseGeocoded {
        token: PipelineToken,
        result: Result<PlaceIdentifier, ResolutionError>,
    },
    DetailsResolved {
        token: PipelineToken,
        result: Result<PhotoReferenceList, ResolutionError>,
    },
    SuggestionsLoaded {
        request: SearchRequest,
        predictions: Predictions,
    },
    SearchResolved {
        request: SearchRequest,
        result: Result<GeoPoint, ResolutionError>,
    },
    PhotoLoaded {
        generation: Generation,
        index: usize,
        result: Result<Bytes, ResolutionError>,
    },
    /// Closes the blocking notice.
    DismissNotice,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags parsed from the command line.
#[derive(Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PLACE_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Maps API key; takes precedence over the environment and settings.toml.
    pub api_key: Option<String>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("config_dir", &self.config_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
