//! Map catalog - JSON map documents, validated and ready to hot-swap.
//!
//! A map document lists its pixel bounds and its object rectangles. Object
//! properties are closed: `event` (parsed into an [`EventKey`] at load),
//! `text` (passive signage) and `spawn` (respawn marker). Anything the
//! document gets wrong is a [`MapError`] at insert time - a map that made it
//! into the catalog can always be swapped to.

use std::collections::HashMap;

use serde::Deserialize;

use crate::events::EventKey;
use hustle_logic::collision::Rect;

/// Raw map document as found in `data/*.json`.
#[derive(Debug, Deserialize)]
struct MapDoc {
    name: String,
    width: f32,
    height: f32,
    #[serde(default)]
    objects: Vec<ObjectDoc>,
}

#[derive(Debug, Deserialize)]
struct ObjectDoc {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    spawn: bool,
}

/// A validated map: bounds, obstacle list in document order, spawn point.
#[derive(Debug, Clone)]
pub struct MapDef {
    pub name: String,
    pub bounds: Rect,
    pub objects: Vec<ObjectDef>,
    pub spawn: Option<(f32, f32)>,
}

/// One loaded obstacle with its decided properties.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    pub rect: Rect,
    pub event: Option<EventKey>,
    pub text: Option<String>,
}

/// Why a map could not be loaded or looked up.
#[derive(Debug)]
pub enum MapError {
    Parse(serde_json::Error),
    InvalidBounds { map: String },
    UnknownMap(String),
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::Parse(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Parse(e) => write!(f, "Map parse error: {}", e),
            MapError::InvalidBounds { map } => {
                write!(f, "Map '{}' has non-positive bounds", map)
            }
            MapError::UnknownMap(id) => write!(f, "No map registered under '{}'", id),
        }
    }
}

impl std::error::Error for MapError {}

/// All maps known to the session, keyed by identifier.
#[derive(Debug, Default)]
pub struct MapCatalog {
    maps: HashMap<String, MapDef>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a map document, registering it under `id`.
    /// On error the catalog is left unchanged.
    pub fn insert_json(&mut self, id: &str, json: &str) -> Result<(), MapError> {
        let doc: MapDoc = serde_json::from_str(json)?;
        if doc.width <= 0.0 || doc.height <= 0.0 {
            return Err(MapError::InvalidBounds { map: doc.name });
        }

        let mut spawn = None;
        let mut objects = Vec::with_capacity(doc.objects.len());
        for obj in &doc.objects {
            if obj.spawn && spawn.is_none() {
                spawn = Some((obj.x, obj.y));
            }
            objects.push(ObjectDef {
                rect: Rect::new(obj.x, obj.y, obj.width, obj.height),
                event: obj.event.as_deref().map(EventKey::parse),
                text: obj.text.clone(),
            });
        }

        self.maps.insert(
            id.to_string(),
            MapDef {
                name: doc.name,
                bounds: Rect::new(0.0, 0.0, doc.width, doc.height),
                objects,
                spawn,
            },
        );
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&MapDef, MapError> {
        self.maps
            .get(id)
            .ok_or_else(|| MapError::UnknownMap(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.maps.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
