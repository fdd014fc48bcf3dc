// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Library configuration.
//!
//! Where the catalog and favorites live, and what the library seeds on
//! first run.

use crate::models::collection::Collection;
use std::path::PathBuf;

/// File name of the bundled catalog.
pub const CATALOG_FILE_NAME: &str = "Spaces.json";

/// File name of the persisted favorites.
pub const FAVORITES_FILE_NAME: &str = "Favorite.json";

/// Number of catalog entries seeded as favorites on first run.
pub const DEFAULT_FAVORITES_COUNT: usize = 3;

const APP_DIR_NAME: &str = "goodday";

/// Settings for constructing a [`SpaceLibrary`](crate::models::library::SpaceLibrary).
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub catalog_path: PathBuf,
    pub favorites_path: PathBuf,
    /// How many trailing catalog entries become favorites on first run.
    pub default_favorites_count: usize,
    pub collections: Vec<Collection>,
}

impl LibraryConfig {
    /// Configuration with explicit file locations and default settings.
    pub fn new(catalog_path: impl Into<PathBuf>, favorites_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            favorites_path: favorites_path.into(),
            default_favorites_count: DEFAULT_FAVORITES_COUNT,
            collections: Collection::defaults(),
        }
    }

    /// Default catalog location: `resources/Spaces.json` under the working directory.
    pub fn default_catalog_path() -> PathBuf {
        PathBuf::from("resources").join(CATALOG_FILE_NAME)
    }

    /// Default favorites location inside the user's documents directory.
    ///
    /// Falls back to the data directory, then the home directory, then the
    /// working directory.
    pub fn default_favorites_path() -> PathBuf {
        let mut path = dirs::document_dir()
            .or_else(dirs::data_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_default();
        path.push(APP_DIR_NAME);
        path.push(FAVORITES_FILE_NAME);
        path
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::new(Self::default_catalog_path(), Self::default_favorites_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let config = LibraryConfig::default();
        assert!(config.catalog_path.ends_with(CATALOG_FILE_NAME));
        assert!(config.favorites_path.ends_with("goodday/Favorite.json"));
        assert_eq!(config.default_favorites_count, 3);
        assert_eq!(config.collections.len(), 3);
    }
}
