// SPDX-License-Identifier: MPL-2.0
//! Application shell: state ownership and orchestration between the map,
//! the search bar and the gallery.
//!
//! The `App` struct owns the only copies of the camera and the place state
//! (marker + photo list) and lends them to the controllers one message at a
//! time. Startup work that can fail (config, API key, HTTP client) happens in
//! [`Startup::prepare`] before any window opens.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::controller::{MapController, SearchController};
use crate::application::port::Gateways;
use crate::domain::error::ResolutionError;
use crate::domain::geo::Camera;
use crate::domain::place::PlaceState;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::GoogleMapsClient;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Everything resolved before the event loop starts.
#[derive(Clone)]
pub struct Startup {
    pub config: Config,
    /// i18n key of a warning to show once the window is up.
    pub config_warning: Option<String>,
    pub gateways: Gateways,
    pub lang: Option<String>,
}

impl Startup {
    /// Loads the configuration, resolves the API key and builds the provider
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`](crate::error::Error::MissingApiKey)
    /// when no key is configured anywhere, or an HTTP error when the client
    /// cannot be created.
    pub fn prepare(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let api_key = config::resolve_api_key(flags.api_key.as_deref(), &config)?;
        let client = GoogleMapsClient::new(config::provider_settings(&config, &api_key))?;

        Ok(Self::with_gateways(
            config,
            config_warning,
            Gateways::from_provider(Arc::new(client)),
            flags.lang,
        ))
    }

    /// Assembles a startup from already-built gateways.
    #[must_use]
    pub fn with_gateways(
        config: Config,
        config_warning: Option<String>,
        gateways: Gateways,
        lang: Option<String>,
    ) -> Self {
        Self {
            config,
            config_warning,
            gateways,
            lang,
        }
    }
}

impl fmt::Debug for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Startup")
            .field("config_warning", &self.config_warning)
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    camera: Camera,
    place: PlaceState,
    map: MapController,
    search: SearchController,
    gallery: gallery::State,
    /// Blocking notice for the last click-path failure, if not dismissed.
    notice: Option<ResolutionError>,
    notifications: notifications::Manager,
    photo_max_width: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("camera", &self.camera)
            .field("place", &self.place)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    // iced 0.14 requires a `Fn` boot; the startup is cheap to clone.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            config_warning,
            gateways,
            lang,
        } = startup;

        let i18n = I18n::new(lang, &config);
        let center = config.map_center();

        let mut app = Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            camera: Camera::new(center, config.map_zoom()),
            place: PlaceState::new(center),
            map: MapController::new(gateways.geocode.clone(), gateways.details, gateways.photos),
            search: SearchController::new(
                gateways.geocode,
                gateways.autocomplete,
                config.search_zoom(),
            ),
            gallery: gallery::State::new(config.photos_per_page()),
            notice: None,
            notifications: notifications::Manager::new(),
            photo_max_width: config.photo_max_width(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        tracing::info!(center = %center, zoom = app.camera.zoom().value(), "application started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let event_sub = subscription::create_event_subscription(self.notice.is_some());

        Subscription::batch([tick_sub, event_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            camera: &mut self.camera,
            place: &mut self.place,
            map: &mut self.map,
            search: &mut self.search,
            gallery: &mut self.gallery,
            notice: &mut self.notice,
            notifications: &mut self.notifications,
            photo_max_width: self.photo_max_width,
        };

        match message {
            Message::Map(map_message) => update::handle_map_message(&mut ctx, map_message),
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::ReverseGeocoded { token, result } => {
                update::handle_reverse_geocoded(&mut ctx, token, result)
            }
            Message::DetailsResolved { token, result } => {
                update::handle_details_resolved(&mut ctx, token, result)
            }
            Message::SuggestionsLoaded {
                request,
                predictions,
            } => update::handle_suggestions_loaded(&mut ctx, request, predictions),
            Message::SearchResolved { request, result } => {
                update::handle_search_resolved(&mut ctx, request, result)
            }
            Message::PhotoLoaded {
                generation,
                index,
                result,
            } => update::handle_photo_loaded(&mut ctx, generation, index, result),
            Message::DismissNotice => update::handle_dismiss_notice(&mut ctx),
            Message::Tick(_) => update::handle_notification_message(
                &mut ctx,
                &notifications::NotificationMessage::Tick,
            ),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            camera: &self.camera,
            place: &self.place,
            search: &self.search,
            gallery: &self.gallery,
            notice: self.notice.as_ref(),
            notifications: &self.notifications,
        })
    }
}
