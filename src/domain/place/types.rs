// SPDX-License-Identifier: MPL-2.0
//! Place domain types.
//!
//! Identifiers and photo references are opaque provider tokens; the
//! application never interprets them, it only passes them back.

use super::super::geo::GeoPoint;
use std::fmt;

// =============================================================================
// PlaceIdentifier
// =============================================================================

/// Opaque provider-assigned identifier for a geographic place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceIdentifier(String);

impl PlaceIdentifier {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PhotoReference
// =============================================================================

/// Opaque token the provider resolves to one photo image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoReference(String);

impl PhotoReference {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PhotoReferenceList
// =============================================================================

/// Ordered photo references for the most recently resolved place.
///
/// Insertion order is gallery display order. An empty list means no gallery
/// is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoReferenceList(Vec<PhotoReference>);

impl PhotoReferenceList {
    #[must_use]
    pub fn new(references: Vec<PhotoReference>) -> Self {
        Self(references)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoReference> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PhotoReference] {
        &self.0
    }
}

impl FromIterator<PhotoReference> for PhotoReferenceList {
    fn from_iter<I: IntoIterator<Item = PhotoReference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PhotoReferenceList {
    type Item = &'a PhotoReference;
    type IntoIter = std::slice::Iter<'a, PhotoReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Autocomplete
// =============================================================================

/// One ranked autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Human-readable text, also used as the forward-geocoding query.
    pub description: String,
    /// Provider identifier of the suggested place, when known.
    pub place_id: Option<PlaceIdentifier>,
}

impl Suggestion {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            place_id: None,
        }
    }

    #[must_use]
    pub fn with_place_id(mut self, id: PlaceIdentifier) -> Self {
        self.place_id = Some(id);
        self
    }
}

/// Outcome of the latest autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AutocompleteStatus {
    /// No request made yet, or suggestions were cleared.
    #[default]
    Idle,
    /// Suggestions are available.
    Ok,
    /// The provider found nothing for the input.
    ZeroResults,
    /// The provider reported an error status.
    Failed(String),
}

// =============================================================================
// PlaceState
// =============================================================================

/// Cross-component state owned by the application shell.
///
/// `marker` is written by both the click and the search path; `photos` only by
/// the click path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceState {
    pub marker: GeoPoint,
    pub photos: PhotoReferenceList,
}

impl PlaceState {
    #[must_use]
    pub fn new(marker: GeoPoint) -> Self {
        Self {
            marker,
            photos: PhotoReferenceList::default(),
        }
    }
}
