// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Curated collections.
//!
//! A collection is a named list of space ids. It is resolved against the
//! catalog once, when the library loads.

use super::space::{Space, SpaceId};

/// Definition of a curated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub ids: Vec<SpaceId>,
}

impl Collection {
    pub fn new(name: impl Into<String>, ids: Vec<SpaceId>) -> Self {
        Self {
            name: name.into(),
            ids,
        }
    }

    /// The collections shown by the app out of the box.
    pub fn defaults() -> Vec<Collection> {
        vec![
            Collection::new("Morning", vec![1, 2, 3]),
            Collection::new("Calm", vec![4, 5, 6, 7]),
            Collection::new("Spiritual", vec![8]),
        ]
    }

    /// Indices into `catalog` of the members, in catalog order.
    ///
    /// Ids with no catalog entry are skipped.
    pub fn resolve(&self, catalog: &[Space]) -> Vec<usize> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, space)| self.ids.contains(&space.id))
            .map(|(index, _)| index)
            .collect()
    }
}
