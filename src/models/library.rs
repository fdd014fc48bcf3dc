// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The space library.
//!
//! This module owns the catalog of spaces and the user's favorites. The
//! catalog is read once at load time and never changes; favorites are
//! written back to disk after every toggle.

use super::space::{Space, SpaceId};
use crate::config::LibraryConfig;
use crate::error::{LibraryError, LibraryResult};
use crate::io::serialization;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Change notifications sent to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    /// A space was inserted at the front of the favorites.
    FavoriteAdded(SpaceId),
    /// A space was removed from the favorites.
    FavoriteRemoved(SpaceId),
}

/// A collection resolved to catalog indices.
#[derive(Debug)]
struct ResolvedCollection {
    name: String,
    members: Vec<usize>,
}

/// Catalog and favorites state.
#[derive(Debug)]
pub struct SpaceLibrary {
    /// All spaces, in catalog order
    spaces: Vec<Space>,

    /// Favorites, most recently added first
    favorites: Vec<Space>,

    collections: Vec<ResolvedCollection>,

    favorites_path: PathBuf,

    subscribers: Vec<Sender<LibraryEvent>>,
}

impl SpaceLibrary {
    /// Load the catalog and favorites described by `config`.
    ///
    /// If the favorites file does not exist yet it is created with the last
    /// `default_favorites_count` catalog entries before being read back.
    pub fn load(config: &LibraryConfig) -> LibraryResult<Self> {
        let spaces = serialization::load_catalog(&config.catalog_path)?;

        let favorites_path = config.favorites_path.clone();
        if !favorites_path.exists() {
            let start = spaces.len().saturating_sub(config.default_favorites_count);
            let defaults: Vec<SpaceId> = spaces[start..].iter().map(|s| s.id).collect();
            log::info!(
                "Creating favorites store at {} with {:?}",
                favorites_path.display(),
                defaults
            );
            serialization::save_favorite_ids(&defaults, &favorites_path).map_err(|e| {
                log::error!("Couldn't initialize favorites store: {}", e);
                e
            })?;
        }

        let ids = read_favorites(&favorites_path)?;
        let favorites = resolve_favorites(&spaces, &ids);

        let collections = config
            .collections
            .iter()
            .map(|collection| ResolvedCollection {
                name: collection.name.clone(),
                members: collection.resolve(&spaces),
            })
            .collect();

        log::debug!(
            "Library loaded: {} spaces, {} favorites",
            spaces.len(),
            favorites.len()
        );

        Ok(Self {
            spaces,
            favorites,
            collections,
            favorites_path,
            subscribers: Vec::new(),
        })
    }

    /// All spaces, in catalog order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Favorites, most recently added first.
    pub fn favorites(&self) -> &[Space] {
        &self.favorites
    }

    pub fn favorites_path(&self) -> &Path {
        &self.favorites_path
    }

    /// Look up a space by id.
    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|space| space.id == id)
    }

    /// A shuffled view of the catalog for display.
    pub fn shuffled_spaces<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Space> {
        let mut spaces: Vec<&Space> = self.spaces.iter().collect();
        spaces.shuffle(rng);
        spaces
    }

    /// Curated collections with their members, in configuration order.
    pub fn collections(&self) -> Vec<(&str, Vec<&Space>)> {
        self.collections
            .iter()
            .map(|c| (c.name.as_str(), self.members(c)))
            .collect()
    }

    /// Members of the collection called `name` (case-insensitive).
    pub fn collection(&self, name: &str) -> Option<Vec<&Space>> {
        self.collections
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| self.members(c))
    }

    fn members(&self, collection: &ResolvedCollection) -> Vec<&Space> {
        collection.members.iter().map(|&i| &self.spaces[i]).collect()
    }

    /// Check if the space is in the favorites.
    pub fn is_favorite(&self, space: &Space) -> bool {
        self.favorites.iter().any(|f| f.id == space.id)
    }

    /// Add the space to the front of the favorites, or remove it if present.
    ///
    /// The favorites file is rewritten afterwards. A failed write is logged
    /// and the in-memory change is kept. Returns whether the space is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, space: &Space) -> bool {
        let added = if self.is_favorite(space) {
            self.favorites.retain(|f| f.id != space.id);
            false
        } else {
            self.favorites.insert(0, space.clone());
            true
        };

        self.save_favorites();

        self.notify(if added {
            LibraryEvent::FavoriteAdded(space.id)
        } else {
            LibraryEvent::FavoriteRemoved(space.id)
        });

        added
    }

    /// Toggle the favorite state of the catalog space with `id`.
    pub fn toggle_favorite_by_id(&mut self, id: SpaceId) -> LibraryResult<bool> {
        let space = self
            .space(id)
            .cloned()
            .ok_or(LibraryError::UnknownSpace(id))?;
        Ok(self.toggle_favorite(&space))
    }

    /// Favorites other than `space`, in favorites order.
    pub fn favorites_excluding(&self, space: &Space) -> Vec<&Space> {
        self.favorites.iter().filter(|f| f.id != space.id).collect()
    }

    /// The favorite to play after `space`, wrapping around at the end.
    ///
    /// A space that isn't a favorite is treated as sitting at the first
    /// position. Returns `None` when there is nothing else to play.
    pub fn next_favorite_after(&self, space: &Space) -> Option<&Space> {
        match self.favorites.as_slice() {
            [] => None,
            [only] if only.id == space.id => None,
            [only] => Some(only),
            favorites => {
                let index = favorites
                    .iter()
                    .position(|f| f.id == space.id)
                    .unwrap_or(0);
                if index < favorites.len() - 1 {
                    Some(&favorites[index + 1])
                } else {
                    Some(&favorites[0])
                }
            }
        }
    }

    /// Register for change notifications.
    pub fn subscribe(&mut self) -> Receiver<LibraryEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    fn notify(&mut self, event: LibraryEvent) {
        // Drop subscribers whose receiver has gone away
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
    }

    fn save_favorites(&self) {
        let ids: Vec<SpaceId> = self.favorites.iter().map(|f| f.id).collect();
        if let Err(e) = serialization::save_favorite_ids(&ids, &self.favorites_path) {
            log::error!("Unable to save favorites: {}", e);
        }
    }
}

/// Read the stored favorites ids. Any failure here is a parse failure.
fn read_favorites(path: &Path) -> LibraryResult<Vec<SpaceId>> {
    serialization::load_favorite_ids(path).map_err(|e| {
        log::error!("Couldn't load favorites store {}: {}", path.display(), e);
        match e {
            LibraryError::ResourceNotFound { path } => {
                LibraryError::parse(path, "favorites file is not readable")
            }
            other => other,
        }
    })
}

/// Resolve stored ids against the catalog, keeping stored order.
///
/// Unknown ids and repeats are dropped.
fn resolve_favorites(spaces: &[Space], ids: &[SpaceId]) -> Vec<Space> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| {
            let space = spaces.iter().find(|s| s.id == *id);
            if space.is_none() {
                log::warn!("Dropping favorite {} with no catalog entry", id);
            }
            space.cloned()
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::space::fixtures;

    /// Write a catalog of `ids` into `dir` and return a config pointing at it.
    pub fn config_with_catalog(dir: &Path, ids: &[SpaceId]) -> LibraryConfig {
        let catalog_path = dir.join("Spaces.json");
        serialization::export_catalog_json(&fixtures::catalog(ids), &catalog_path).unwrap();
        LibraryConfig::new(catalog_path, dir.join("Favorite.json"))
    }

    /// Load a library whose favorites file holds `favorites`.
    pub fn library(dir: &Path, ids: &[SpaceId], favorites: &[SpaceId]) -> SpaceLibrary {
        let config = config_with_catalog(dir, ids);
        serialization::save_favorite_ids(favorites, &config.favorites_path).unwrap();
        SpaceLibrary::load(&config).unwrap()
    }

    pub fn favorite_ids(library: &SpaceLibrary) -> Vec<SpaceId> {
        library.favorites().iter().map(|s| s.id).collect()
    }
}
