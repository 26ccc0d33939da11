// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` that returns an `Event` for the shell when
//! needed, and a `view` fed by a `ViewContext`.
//!
//! # Components
//!
//! - [`map`] - Map canvas with click, drag and zoom handling
//! - [`search`] - Address search bar with autocomplete suggestions
//! - [`gallery`] - Paged photo carousel for the clicked place
//! - [`notice`] - Blocking notice for click-path failures
//! - [`notifications`] - Toast notifications for non-blocking feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod map;
pub mod notice;
pub mod notifications;
pub mod search;
pub mod styles;
pub mod theming;
