// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GoodDay - browse the space catalog and manage favorites.
//!
//! ```bash
//! goodday list
//! goodday toggle 4
//! goodday next 4
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use goodday::app::{Command, LibraryApp};
use goodday::{LibraryConfig, SpaceLibrary};
use std::path::PathBuf;

/// GoodDay space library
#[derive(Parser)]
#[command(name = "goodday")]
#[command(about = "Browse the space catalog and manage favorites")]
#[command(version)]
struct Cli {
    /// Catalog document (JSON or YAML)
    #[arg(long, env = "GOODDAY_CATALOG")]
    catalog: Option<PathBuf>,

    /// Favorites file
    #[arg(long, env = "GOODDAY_FAVORITES")]
    favorites: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let mut config = LibraryConfig::default();
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(favorites) = cli.favorites {
        config.favorites_path = favorites;
    }

    let library = SpaceLibrary::load(&config)
        .with_context(|| format!("Failed to load library from {}", config.catalog_path.display()))?;

    let mut app = LibraryApp::new(library);
    let stdout = std::io::stdout();
    app.run(&cli.command, &mut stdout.lock())?;

    Ok(())
}
