// SPDX-License-Identifier: MPL-2.0
//! `place_lens` is a map viewer built with the Iced GUI framework.
//!
//! Clicking the map reverse-geocodes the point into a place and shows that
//! place's photos in a paged gallery; the search bar moves the map to an
//! address picked from autocomplete suggestions.
//!
//! # Layers
//!
//! - [`domain`] - pure types: points, camera, projection, places, errors
//! - [`application`] - gateway ports and the click/search controllers
//! - [`infrastructure`] - Google Maps Platform HTTP adapter
//! - [`ui`] - Iced widgets
//! - [`app`] - the shell: config, messages, update loop, view

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
