// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the concrete provider.
//!
//! # Available Ports
//!
//! - [`geocode`]: Reverse and forward geocoding
//! - [`places`]: Place details, autocomplete suggestions and photo downloads
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` and held as `Arc<dyn ..>` by the controllers
//! - Methods are `async`; callers turn the futures into Iced `Task`s
//!
//! # Example
//!
//! ```ignore
//! use place_lens::application::port::GeocodeGateway;
//! use place_lens::domain::geo::GeoPoint;
//!
//! async fn place_at(gateway: &dyn GeocodeGateway) {
//!     match gateway.reverse_geocode(GeoPoint::new(28.6, 77.2)).await {
//!         Ok(id) => println!("place {id}"),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

pub mod geocode;
pub mod places;

use crate::domain::error::ResolutionError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

pub use geocode::{
    select_forward_result, select_reverse_result, GeocodeGateway, REVERSE_GEOCODE_RANK,
};
pub use places::{AutocompleteGateway, PhotoGateway, PlaceDetailsGateway, Predictions};

/// Owned future of one gateway call, ready to hand to `Task::perform`.
pub type GatewayFuture<T> = BoxFuture<'static, Result<T, ResolutionError>>;

/// The full set of provider seams the application needs.
#[derive(Clone)]
pub struct Gateways {
    pub geocode: Arc<dyn GeocodeGateway>,
    pub details: Arc<dyn PlaceDetailsGateway>,
    pub autocomplete: Arc<dyn AutocompleteGateway>,
    pub photos: Arc<dyn PhotoGateway>,
}

impl Gateways {
    /// Uses one adapter for every port.
    pub fn from_provider<P>(provider: Arc<P>) -> Self
    where
        P: GeocodeGateway + PlaceDetailsGateway + AutocompleteGateway + PhotoGateway + 'static,
    {
        Self {
            geocode: provider.clone(),
            details: provider.clone(),
            autocomplete: provider.clone(),
            photos: provider,
        }
    }
}

impl std::fmt::Debug for Gateways {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateways").finish_non_exhaustive()
    }
}
