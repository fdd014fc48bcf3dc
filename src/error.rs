// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the space library.

use crate::models::space::SpaceId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or persisting library data.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A required resource does not exist.
    #[error("couldn't find {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    /// A resource exists but couldn't be read or decoded.
    #[error("couldn't parse {}: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    /// Writing the favorites file failed.
    #[error("unable to save {}", .path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No space with this id exists in the catalog.
    #[error("no space with id {0} in the catalog")]
    UnknownSpace(SpaceId),
}

impl LibraryError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ParseFailure {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
