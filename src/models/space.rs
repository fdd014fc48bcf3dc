// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Space data structures.
//!
//! A space is one immutable entry in the catalog. The catalog document uses
//! snake_case keys which map one-to-one onto these fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-unique identifier of a space.
pub type SpaceId = i64;

/// Opaque reference to the immersive destination for a space.
///
/// The library never interprets this value; it is handed to whatever
/// presents the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(serde_json::Value);

impl Destination {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Detailed information about a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SpaceInfo {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single entry in the space catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Space {
    pub id: SpaceId,
    pub title: String,
    /// Base name used to derive image asset names.
    pub image_name: String,
    pub description: String,
    pub info: SpaceInfo,
    pub destination: Destination,
}

impl Space {
    /// Genre and category labels, in catalog order.
    pub fn tags(&self) -> &[String] {
        &self.info.tags
    }

    /// Name of the wide variant of the space's image.
    pub fn landscape_image_name(&self) -> String {
        format!("{}_landscape", self.image_name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snake_case_entry() {
        let json = r#"{
            "id": 4,
            "title": "Beach",
            "image_name": "beach",
            "description": "Waves",
            "info": { "tags": ["Calm", "Nature"] },
            "destination": "beach"
        }"#;

        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.id, 4);
        assert_eq!(space.image_name, "beach");
        assert_eq!(space.tags(), ["Calm", "Nature"]);
        assert_eq!(space.destination.to_string(), "beach");
    }

    #[test]
    fn test_camel_case_keys_rejected() {
        let json = r#"{
            "id": 4,
            "title": "Beach",
            "imageName": "beach",
            "description": "Waves",
            "info": { "tags": [] },
            "destination": "beach"
        }"#;

        assert!(serde_json::from_str::<Space>(json).is_err());
    }

    #[test]
    fn test_landscape_image_name() {
        let space = fixtures::space(7);
        assert_eq!(space.landscape_image_name(), "space_7_landscape");
    }

    #[test]
    fn test_structured_destination_is_preserved() {
        let json = r#"{
            "id": 1,
            "title": "Lake",
            "image_name": "lake",
            "description": "Still water",
            "info": { "tags": [] },
            "destination": { "scene": "lake", "immersion": "progressive" }
        }"#;

        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.destination.as_value()["scene"], "lake");
    }
}
