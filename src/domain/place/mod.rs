// SPDX-License-Identifier: MPL-2.0
//! Place domain types.

mod types;

pub use types::{
    AutocompleteStatus, PhotoReference, PhotoReferenceList, PlaceIdentifier, PlaceState,
    Suggestion,
};
