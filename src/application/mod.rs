// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`controller`]: Click and search controllers driving the ports
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer feeds user input into the controllers and turns the
//!   futures they return into tasks
//!
//! # Example
//!
//! ```ignore
//! use place_lens::application::controller::MapController;
//! use place_lens::application::port::Gateways;
//!
//! let gateways = Gateways::from_provider(client);
//! let mut map = MapController::new(gateways.geocode, gateways.details, gateways.photos);
//! let (token, reverse) = map.click(point, &mut place_state);
//! ```

pub mod controller;
pub mod port;
