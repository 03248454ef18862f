// Player catalog: the authoritative stat table, keyed by player name.
//
// Read-mostly, mutated only through explicit stat edits. The catalog never
// interprets media references; it just hands them to the presentation layer.

pub mod loader;
pub mod schema;

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use schema::{field_index, StatRecord, StatValue};

/// ADP sort key for players with no usable ADP data. Large enough that they
/// fall after every real draft position, deterministically.
const ADP_SENTINEL: f64 = 9999.0;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown player: {name}")]
    NotFound { name: String },

    #[error("unknown stat field: {field}")]
    InvalidField { field: String },
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A highlight-media reference. The core never opens or validates it;
/// playback belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaRef {
    /// A local file path (e.g. `videos/JaMarr_Chase.mp4`).
    File(PathBuf),
    /// A remote URL.
    Url(String),
}

impl MediaRef {
    /// Parse a raw reference string. Empty strings mean "no media".
    pub fn from_raw(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Some(MediaRef::Url(trimmed.to_string()))
        } else {
            Some(MediaRef::File(PathBuf::from(trimmed)))
        }
    }
}

/// One catalog entry: a player's identity, stats, and optional media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique display name; the de-facto primary key.
    pub name: String,
    /// The full stat record (every schema field present, zero-filled).
    pub stats: StatRecord,
    /// Optional highlight-media reference.
    pub media: Option<MediaRef>,
}

impl Player {
    /// A player with zeroed stats and no media.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            stats: StatRecord::zeroed(),
            media: None,
        }
    }

    /// The player's ADP sort key: positive numeric ADP, or the sentinel
    /// when the value is zero, non-numeric, or negative.
    fn adp_key(&self) -> f64 {
        match self.stats.get("ADP").and_then(StatValue::as_f64) {
            Some(adp) if adp > 0.0 => adp,
            _ => ADP_SENTINEL,
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerCatalog
// ---------------------------------------------------------------------------

/// The in-memory player catalog. Single-writer, single-reader, in-process.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    players: HashMap<String, Player>,
}

impl PlayerCatalog {
    pub fn new() -> Self {
        PlayerCatalog::default()
    }

    /// Insert or replace a catalog entry. Names are globally unique, so a
    /// second insert under the same name replaces the first.
    pub fn insert(&mut self, player: Player) {
        self.players.insert(player.name.clone(), player);
    }

    /// Number of players in the catalog.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether the catalog knows this player.
    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    /// Full catalog entry for a player, if known.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// The player's highlight-media reference, if any. Unknown players and
    /// players without media both yield `None`; a missing highlight is an
    /// inert fallback, never an error.
    pub fn media(&self, name: &str) -> Option<&MediaRef> {
        self.players.get(name).and_then(|p| p.media.as_ref())
    }

    /// The full stat record for a player.
    pub fn get_stats(&self, name: &str) -> Result<&StatRecord, CatalogError> {
        self.players
            .get(name)
            .map(|p| &p.stats)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Overwrite a single stat field from a raw edit string.
    ///
    /// The raw value is coerced once at write time: integral numbers become
    /// integers, non-integral numbers become floats, everything else is kept
    /// verbatim as text.
    pub fn set_stat(&mut self, name: &str, field: &str, raw: &str) -> Result<(), CatalogError> {
        if field_index(field).is_none() {
            return Err(CatalogError::InvalidField {
                field: field.to_string(),
            });
        }
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })?;
        player.stats.set(field, StatValue::coerce(raw));
        Ok(())
    }

    /// All catalog players not in `excluding`, ascending by ADP. Players
    /// without usable ADP data sort after everyone else; ties break by name
    /// so the ordering is deterministic.
    pub fn list_available(&self, excluding: &HashSet<String>) -> Vec<&Player> {
        let mut available: Vec<&Player> = self
            .players
            .values()
            .filter(|p| !excluding.contains(&p.name))
            .collect();
        available.sort_by(|a, b| {
            a.adp_key()
                .total_cmp(&b.adp_key())
                .then_with(|| a.name.cmp(&b.name))
        });
        available
    }
}
