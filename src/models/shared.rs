// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Thread-safe handle to a space library.
//!
//! Toggling and the favorites write it triggers run under one lock.

use super::library::{LibraryEvent, SpaceLibrary};
use super::space::{Space, SpaceId};
use crate::error::LibraryResult;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-protected [`SpaceLibrary`].
#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<SpaceLibrary>>,
}

impl SharedLibrary {
    pub fn new(library: SpaceLibrary) -> Self {
        Self {
            inner: Arc::new(Mutex::new(library)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SpaceLibrary> {
        // Library state is consistent between calls
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only query against the library.
    pub fn read<T>(&self, f: impl FnOnce(&SpaceLibrary) -> T) -> T {
        f(&*self.lock())
    }

    pub fn toggle_favorite(&self, space: &Space) -> bool {
        self.lock().toggle_favorite(space)
    }

    pub fn toggle_favorite_by_id(&self, id: SpaceId) -> LibraryResult<bool> {
        self.lock().toggle_favorite_by_id(id)
    }

    pub fn is_favorite(&self, space: &Space) -> bool {
        self.lock().is_favorite(space)
    }

    pub fn subscribe(&self) -> Receiver<LibraryEvent> {
        self.lock().subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::serialization;
    use crate::models::library::test_support;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_concurrent_toggles_are_serialized() {
        let dir = tempdir().unwrap();
        let ids: Vec<SpaceId> = (1..=8).collect();
        let library = test_support::library(dir.path(), &ids, &[]);
        let favorites_path = library.favorites_path().to_path_buf();
        let shared = SharedLibrary::new(library);

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let shared = shared.clone();
                thread::spawn(move || shared.toggle_favorite_by_id(id).unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }

        let mut in_memory = shared.read(test_support::favorite_ids);
        let mut on_disk = serialization::load_favorite_ids(&favorites_path).unwrap();
        assert_eq!(in_memory, on_disk);

        in_memory.sort();
        on_disk.sort();
        assert_eq!(in_memory, ids);
    }

    #[test]
    fn test_read_and_subscribe() {
        let dir = tempdir().unwrap();
        let shared = SharedLibrary::new(test_support::library(dir.path(), &[1, 2], &[2]));
        let events = shared.subscribe();

        let space = shared.read(|lib| lib.space(1).cloned()).unwrap();
        assert!(!shared.is_favorite(&space));
        assert!(shared.toggle_favorite(&space));
        assert_eq!(events.try_recv().unwrap(), LibraryEvent::FavoriteAdded(1));
    }
}
