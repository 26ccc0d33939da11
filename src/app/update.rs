// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every gateway call leaves this module as a `Task::perform` whose completion
//! comes back tagged with the token (click path) or sequence number (search
//! path) it was started with. The controllers decide whether a completion is
//! still current.

use super::Message;
use crate::application::controller::{
    DetailsOutcome, GeocodeOutcome, MapController, PipelineToken, SearchController,
    SearchRequest,
};
use crate::application::port::Predictions;
use crate::domain::error::ResolutionError;
use crate::domain::geo::{Camera, GeoPoint};
use crate::domain::place::{PhotoReferenceList, PlaceIdentifier, PlaceState};
use crate::ui::gallery::{self, Generation};
use crate::ui::map::{self, Event as MapEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::search::{self, Event as SearchEvent};
use bytes::Bytes;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub camera: &'a mut Camera,
    pub place: &'a mut PlaceState,
    pub map: &'a mut MapController,
    pub search: &'a mut SearchController,
    pub gallery: &'a mut gallery::State,
    pub notice: &'a mut Option<ResolutionError>,
    pub notifications: &'a mut notifications::Manager,
    pub photo_max_width: u32,
}

// =============================================================================
// Click path
// =============================================================================

/// Map input. Ignored entirely while the blocking notice is open.
pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map::Message) -> Task<Message> {
    if ctx.notice.is_some() {
        return Task::none();
    }

    match map::update(message, ctx.camera) {
        MapEvent::None => Task::none(),
        MapEvent::Clicked(point) => start_click(ctx, point),
    }
}

fn start_click(ctx: &mut UpdateContext<'_>, point: GeoPoint) -> Task<Message> {
    let (token, future) = ctx.map.click(point, ctx.place);
    Task::perform(future, move |result| Message::ReverseGeocoded { token, result })
}

pub fn handle_reverse_geocoded(
    ctx: &mut UpdateContext<'_>,
    token: PipelineToken,
    result: Result<PlaceIdentifier, ResolutionError>,
) -> Task<Message> {
    match ctx.map.geocoded(token, result) {
        GeocodeOutcome::FetchDetails(future) => {
            Task::perform(future, move |result| Message::DetailsResolved { token, result })
        }
        GeocodeOutcome::Failed(err) => {
            *ctx.notice = Some(err);
            Task::none()
        }
        GeocodeOutcome::Discarded => Task::none(),
    }
}

pub fn handle_details_resolved(
    ctx: &mut UpdateContext<'_>,
    token: PipelineToken,
    result: Result<PhotoReferenceList, ResolutionError>,
) -> Task<Message> {
    match ctx.map.details_resolved(token, result, ctx.place) {
        DetailsOutcome::Settled => load_gallery(ctx),
        DetailsOutcome::Failed(err) => {
            *ctx.notice = Some(err);
            Task::none()
        }
        DetailsOutcome::Discarded => Task::none(),
    }
}

/// Resets the gallery to the current photo list and downloads every photo.
fn load_gallery(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.clear_photo_warnings();
    let generation = ctx.gallery.reset(ctx.place.photos.len());

    let downloads = ctx
        .map
        .photo_downloads(&ctx.place.photos, ctx.photo_max_width)
        .into_iter()
        .map(|download| {
            let index = download.index;
            Task::perform(download.future, move |result| Message::PhotoLoaded {
                generation,
                index,
                result,
            })
        });

    Task::batch(downloads)
}

pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    index: usize,
    result: Result<Bytes, ResolutionError>,
) -> Task<Message> {
    let failure = result.as_ref().err().cloned();
    if !ctx.gallery.photo_loaded(generation, index, result) {
        tracing::debug!(index, "discarding photo for a previous place");
        return Task::none();
    }

    if let Some(err) = failure {
        tracing::warn!(index, error = %err, "photo download failed");
        let mut notification = Notification::warning(err.i18n_key());
        if let Some(status) = err.status() {
            notification = notification.with_arg("status", status);
        }
        ctx.notifications.push(notification);
    }
    Task::none()
}

pub fn handle_dismiss_notice(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.notice = None;
    Task::none()
}

// =============================================================================
// Search path
// =============================================================================

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search::Message,
) -> Task<Message> {
    match search::update(message, ctx.search.value()) {
        SearchEvent::None => Task::none(),
        SearchEvent::InputChanged(text) => match ctx.search.input_changed(text) {
            Some((request, future)) => Task::perform(future, move |predictions| {
                Message::SuggestionsLoaded {
                    request,
                    predictions,
                }
            }),
            None => Task::none(),
        },
        SearchEvent::Selected(address) => {
            let (request, future) = ctx.search.suggestion_selected(address);
            Task::perform(future, move |result| Message::SearchResolved { request, result })
        }
    }
}

pub fn handle_suggestions_loaded(
    ctx: &mut UpdateContext<'_>,
    request: SearchRequest,
    predictions: Predictions,
) -> Task<Message> {
    ctx.search.suggestions_loaded(request, predictions);
    Task::none()
}

pub fn handle_search_resolved(
    ctx: &mut UpdateContext<'_>,
    request: SearchRequest,
    result: Result<GeoPoint, ResolutionError>,
) -> Task<Message> {
    ctx.search.resolved(request, result, ctx.camera, ctx.place);
    Task::none()
}

// =============================================================================
// Gallery & notifications
// =============================================================================

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    ctx.gallery.update(message);
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
