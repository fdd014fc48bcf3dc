// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GoodDay space library
//!
//! Loads the catalog of spaces, keeps the user's favorites, and persists
//! them to a JSON file after every change.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod models;

pub use config::LibraryConfig;
pub use error::{LibraryError, LibraryResult};
pub use models::library::{LibraryEvent, SpaceLibrary};
pub use models::shared::SharedLibrary;
pub use models::space::{Destination, Space, SpaceId, SpaceInfo};
