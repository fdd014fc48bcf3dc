// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog and favorites serialization.
//!
//! The catalog is read from a JSON or YAML document. Favorites are stored
//! as a pretty-printed JSON array of space ids, most recent first.

use crate::error::{LibraryError, LibraryResult};
use crate::models::space::{Space, SpaceId};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from the file extension. Defaults to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                CatalogFormat::Yaml
            }
            _ => CatalogFormat::Json,
        }
    }
}

/// Load the space catalog, in document order.
pub fn load_catalog(path: &Path) -> LibraryResult<Vec<Space>> {
    let text = read_resource(path)?;
    let spaces: Vec<Space> = match CatalogFormat::from_path(path) {
        CatalogFormat::Json => {
            serde_json::from_str(&text).map_err(|e| LibraryError::parse(path, e))?
        }
        CatalogFormat::Yaml => {
            serde_yaml::from_str(&text).map_err(|e| LibraryError::parse(path, e))?
        }
    };

    let mut seen = HashSet::new();
    if let Some(dup) = spaces.iter().find(|space| !seen.insert(space.id)) {
        return Err(LibraryError::parse(
            path,
            format!("duplicate space id {}", dup.id),
        ));
    }

    log::debug!("Loaded {} spaces from {}", spaces.len(), path.display());
    Ok(spaces)
}

/// Export a catalog as pretty-printed JSON.
pub fn export_catalog_json(spaces: &[Space], path: &Path) -> LibraryResult<()> {
    let json = serde_json::to_string_pretty(spaces).map_err(|e| LibraryError::parse(path, e))?;
    write_file(path, json.as_bytes())
}

/// Read the persisted favorites id list.
pub fn load_favorite_ids(path: &Path) -> LibraryResult<Vec<SpaceId>> {
    let text = read_resource(path)?;
    serde_json::from_str(&text).map_err(|e| LibraryError::parse(path, e))
}

/// Overwrite the favorites file with `ids`.
pub fn save_favorite_ids(ids: &[SpaceId], path: &Path) -> LibraryResult<()> {
    let json = serde_json::to_string_pretty(ids).map_err(|e| LibraryError::parse(path, e))?;
    write_file(path, json.as_bytes())?;
    log::debug!("Saved {} favorites to {}", ids.len(), path.display());
    Ok(())
}

fn read_resource(path: &Path) -> LibraryResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LibraryError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => LibraryError::parse(path, e),
    })
}

fn write_file(path: &Path, contents: &[u8]) -> LibraryResult<()> {
    let failure = |source: std::io::Error| LibraryError::PersistenceWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(failure)?;
    }
    std::fs::write(path, contents).map_err(failure)
}
