// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line front end for the space library.
//!
//! Each command reads from or toggles the library and prints the result,
//! the way a view would render it.

use crate::error::{LibraryError, LibraryResult};
use crate::models::library::SpaceLibrary;
use crate::models::space::{Space, SpaceId};
use clap::Subcommand;
use std::io::Write;

/// Library commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every space in the catalog
    List {
        /// Show the catalog in random order
        #[arg(long)]
        shuffle: bool,
    },
    /// List favorites, most recent first
    Favorites,
    /// List curated collections
    Collections,
    /// Show one space with its favorite state
    Show { id: SpaceId },
    /// Add or remove a space from the favorites
    Toggle { id: SpaceId },
    /// Show the favorite that plays after a space
    Next { id: SpaceId },
}

/// Runs commands against a loaded library.
pub struct LibraryApp {
    library: SpaceLibrary,
}

impl LibraryApp {
    pub fn new(library: SpaceLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &SpaceLibrary {
        &self.library
    }

    /// Run `command`, writing its output to `out`.
    pub fn run(&mut self, command: &Command, out: &mut dyn Write) -> anyhow::Result<()> {
        match command {
            Command::List { shuffle } => {
                let spaces: Vec<&Space> = if *shuffle {
                    self.library.shuffled_spaces(&mut rand::thread_rng())
                } else {
                    self.library.spaces().iter().collect()
                };
                for space in spaces {
                    self.write_row(space, out)?;
                }
            }
            Command::Favorites => {
                for space in self.library.favorites() {
                    write_space(space, out)?;
                }
            }
            Command::Collections => {
                for (name, members) in self.library.collections() {
                    writeln!(out, "{}:", name)?;
                    for space in members {
                        write!(out, "  ")?;
                        write_space(space, out)?;
                    }
                }
            }
            Command::Show { id } => {
                let space = self.lookup(*id)?;
                writeln!(out, "{}", space.title)?;
                writeln!(out, "{}", space.description)?;
                writeln!(out, "Tags: {}", space.tags().join(", "))?;
                writeln!(out, "Image: {}", space.landscape_image_name())?;
                writeln!(out, "Destination: {}", space.destination)?;
                writeln!(out, "Favorite: {}", yes_no(self.library.is_favorite(space)))?;

                let others = self.library.favorites_excluding(space);
                if !others.is_empty() {
                    writeln!(out, "Other favorites:")?;
                    for other in others {
                        write!(out, "  ")?;
                        write_space(other, out)?;
                    }
                }
            }
            Command::Toggle { id } => {
                let added = self.library.toggle_favorite_by_id(*id)?;
                let space = self.lookup(*id)?;
                if added {
                    writeln!(out, "Added {} to favorites", space.title)?;
                } else {
                    writeln!(out, "Removed {} from favorites", space.title)?;
                }
            }
            Command::Next { id } => {
                let space = self.lookup(*id)?;
                match self.library.next_favorite_after(space) {
                    Some(next) => write_space(next, out)?,
                    None => writeln!(out, "No other favorites")?,
                }
            }
        }
        Ok(())
    }

    fn lookup(&self, id: SpaceId) -> LibraryResult<&Space> {
        self.library.space(id).ok_or(LibraryError::UnknownSpace(id))
    }

    fn write_row(&self, space: &Space, out: &mut dyn Write) -> std::io::Result<()> {
        let marker = if self.library.is_favorite(space) { "*" } else { " " };
        write!(out, "{} ", marker)?;
        write_space(space, out)
    }
}

fn write_space(space: &Space, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{:>4}  {}", space.id, space.title)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::library::test_support;
    use tempfile::tempdir;

    fn run(app: &mut LibraryApp, command: Command) -> String {
        let mut out = Vec::new();
        app.run(&command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_toggle_and_favorites() {
        let dir = tempdir().unwrap();
        let mut app = LibraryApp::new(test_support::library(dir.path(), &[1, 2, 3], &[3]));

        assert_eq!(run(&mut app, Command::Toggle { id: 1 }), "Added Space 1 to favorites\n");
        assert_eq!(run(&mut app, Command::Favorites), "   1  Space 1\n   3  Space 3\n");
        assert_eq!(run(&mut app, Command::Toggle { id: 3 }), "Removed Space 3 from favorites\n");
        assert_eq!(test_support::favorite_ids(app.library()), vec![1]);
    }

    #[test]
    fn test_list_marks_favorites() {
        let dir = tempdir().unwrap();
        let mut app = LibraryApp::new(test_support::library(dir.path(), &[1, 2], &[2]));

        let output = run(&mut app, Command::List { shuffle: false });
        assert_eq!(output, "     1  Space 1\n*    2  Space 2\n");
    }

    #[test]
    fn test_next_and_show() {
        let dir = tempdir().unwrap();
        let mut app = LibraryApp::new(test_support::library(dir.path(), &[1, 2], &[1]));

        assert_eq!(run(&mut app, Command::Next { id: 1 }), "No other favorites\n");
        assert_eq!(run(&mut app, Command::Next { id: 2 }), "   1  Space 1\n");

        let shown = run(&mut app, Command::Show { id: 2 });
        assert!(shown.contains("Favorite: no"));
        assert!(shown.contains("Image: space_2_landscape"));
        assert!(shown.contains("Other favorites:\n     1  Space 1\n"));
    }

    #[test]
    fn test_unknown_id_is_error() {
        let dir = tempdir().unwrap();
        let mut app = LibraryApp::new(test_support::library(dir.path(), &[1], &[]));

        let mut out = Vec::new();
        let err = app.run(&Command::Show { id: 7 }, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LibraryError>(),
            Some(LibraryError::UnknownSpace(7))
        ));
    }
}
