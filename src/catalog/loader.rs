// Catalog data loading and merging.
//
// Two tabular sources, merged by player name with left-join semantics:
// - players_meta.csv defines catalog membership (name + optional media ref)
// - player_stats.csv overlays stat columns onto known players
// Every catalog name is present even if stats are missing; absent columns
// and rows zero-fill. Embedded copies of both files are the fallback when
// the configured paths don't exist.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::DataPaths;

use super::schema::{field_index, StatValue};
use super::{MediaRef, Player, PlayerCatalog};

/// Bundled dataset, used when no data files are present on disk.
const EMBEDDED_META: &str = include_str!("../../data/players_meta.csv");
const EMBEDDED_STATS: &str = include_str!("../../data/player_stats.csv");

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// players_meta.csv row. Extra columns are absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawMetaRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(default)]
    video_url: String,
    /// Absorb any extra columns a hand-edited file might carry.
    #[serde(flatten)]
    _extra: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

/// Build the base catalog from the meta CSV: one zero-filled entry per row.
fn load_meta_from_reader<R: Read>(reader: R, label: &str) -> Result<PlayerCatalog, LoaderError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut catalog = PlayerCatalog::new();

    for result in rdr.deserialize::<RawMetaRow>() {
        let row = result.map_err(|e| LoaderError::Csv {
            path: label.to_string(),
            source: e,
        })?;
        let name = row.player.trim();
        if name.is_empty() {
            warn!("skipping meta row with empty player name in {}", label);
            continue;
        }
        if catalog.contains(name) {
            warn!("duplicate player '{}' in {}; keeping the last row", name, label);
        }
        let mut player = Player::new(name);
        player.media = MediaRef::from_raw(&row.video_url);
        catalog.insert(player);
    }

    Ok(catalog)
}

/// Overlay stat columns from the stats CSV onto an existing catalog.
///
/// The column set varies by source, so rows deserialize as header -> value
/// maps rather than a fixed struct. Columns outside the schema and players
/// outside the catalog are skipped with a warning.
fn overlay_stats_from_reader<R: Read>(
    catalog: &mut PlayerCatalog,
    reader: R,
    label: &str,
) -> Result<(), LoaderError> {
    let mut rdr = csv::Reader::from_reader(reader);

    for result in rdr.deserialize::<HashMap<String, String>>() {
        let mut row = result.map_err(|e| LoaderError::Csv {
            path: label.to_string(),
            source: e,
        })?;

        let name = match row.remove("Player") {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => {
                warn!("skipping stats row without a Player value in {}", label);
                continue;
            }
        };
        if !catalog.contains(&name) {
            // Left join: stats for names outside the catalog are dropped.
            warn!("stats row for unknown player '{}' in {}; ignored", name, label);
            continue;
        }

        for (column, raw) in row {
            if field_index(&column).is_none() {
                warn!("ignoring non-schema column '{}' in {}", column, label);
                continue;
            }
            if raw.trim().is_empty() {
                // Missing cell keeps its zero default.
                continue;
            }
            // set_stat can't fail here: the name and field were just checked.
            let _ = catalog.set_stat(&name, &column, &raw);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Load the full catalog from the configured data paths, falling back to the
/// embedded dataset for any file that doesn't exist.
pub fn load(paths: &DataPaths) -> Result<PlayerCatalog, LoaderError> {
    let mut catalog = match read_source(&paths.players_meta)? {
        Some(text) => load_meta_from_reader(text.as_bytes(), &paths.players_meta)?,
        None => {
            info!("{} not found; using embedded player list", paths.players_meta);
            load_meta_from_reader(EMBEDDED_META.as_bytes(), "embedded players_meta.csv")?
        }
    };

    match read_source(&paths.player_stats)? {
        Some(text) => {
            overlay_stats_from_reader(&mut catalog, text.as_bytes(), &paths.player_stats)?
        }
        None => {
            info!("{} not found; using embedded stat table", paths.player_stats);
            overlay_stats_from_reader(
                &mut catalog,
                EMBEDDED_STATS.as_bytes(),
                "embedded player_stats.csv",
            )?
        }
    }

    info!("catalog loaded: {} players", catalog.len());
    Ok(catalog)
}

/// Read a data file if it exists. `Ok(None)` means "fall back to embedded".
fn read_source(path: &str) -> Result<Option<String>, LoaderError> {
    let p = Path::new(path);
    if !p.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(p)
        .map(Some)
        .map_err(|e| LoaderError::Io {
            path: path.to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::StatValue as SV;

    const META: &str = "\
Player,video_url
Ja'Marr Chase,videos/JaMarr_Chase.mp4
Bijan Robinson,https://example.com/bijan.mp4
Practice Squad Guy,
";

    const STATS: &str = "\
Player,ADP,Receptions,Team,Fantasy PPG
Ja'Marr Chase,1.2,117,CIN,21.5
Bijan Robinson,2,61,ATL,19.0
Somebody Unknown,55,10,FA,3.0
";

    #[test]
    fn meta_defines_catalog_membership() {
        let catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("Ja'Marr Chase"));
        assert!(catalog.contains("Practice Squad Guy"));
    }

    #[test]
    fn meta_parses_media_refs() {
        let catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        assert!(matches!(
            catalog.media("Ja'Marr Chase"),
            Some(MediaRef::File(_))
        ));
        assert!(matches!(
            catalog.media("Bijan Robinson"),
            Some(MediaRef::Url(_))
        ));
        assert!(catalog.media("Practice Squad Guy").is_none());
    }

    #[test]
    fn stats_overlay_coerces_values() {
        let mut catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        overlay_stats_from_reader(&mut catalog, STATS.as_bytes(), "test").unwrap();

        let chase = catalog.get_stats("Ja'Marr Chase").unwrap();
        assert_eq!(chase.get("ADP"), Some(&SV::Float(1.2)));
        assert_eq!(chase.get("Receptions"), Some(&SV::Int(117)));
        assert_eq!(chase.get("Team"), Some(&SV::Text("CIN".to_string())));
        assert_eq!(chase.get("Fantasy PPG"), Some(&SV::Float(21.5)));

        // "2" and "19.0" are integral -> Int
        let bijan = catalog.get_stats("Bijan Robinson").unwrap();
        assert_eq!(bijan.get("ADP"), Some(&SV::Int(2)));
        assert_eq!(bijan.get("Fantasy PPG"), Some(&SV::Int(19)));
    }

    #[test]
    fn stats_left_join_zero_fills_missing_players() {
        let mut catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        overlay_stats_from_reader(&mut catalog, STATS.as_bytes(), "test").unwrap();

        // No stats row: everything stays zeroed, entry still present.
        let squad = catalog.get_stats("Practice Squad Guy").unwrap();
        assert_eq!(squad.get("ADP"), Some(&SV::Int(0)));
        assert_eq!(squad.get("Team"), Some(&SV::Int(0)));
    }

    #[test]
    fn stats_for_unknown_player_ignored() {
        let mut catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        overlay_stats_from_reader(&mut catalog, STATS.as_bytes(), "test").unwrap();
        assert!(!catalog.contains("Somebody Unknown"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn non_schema_columns_are_skipped() {
        let stats = "Player,ADP,Mystery Column\nJa'Marr Chase,3,42\n";
        let mut catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        overlay_stats_from_reader(&mut catalog, stats.as_bytes(), "test").unwrap();
        let chase = catalog.get_stats("Ja'Marr Chase").unwrap();
        assert_eq!(chase.get("ADP"), Some(&SV::Int(3)));
        assert_eq!(chase.get("Mystery Column"), None);
    }

    #[test]
    fn empty_stat_cells_keep_zero_default() {
        let stats = "Player,ADP,Receptions\nJa'Marr Chase,,5\n";
        let mut catalog = load_meta_from_reader(META.as_bytes(), "test").unwrap();
        overlay_stats_from_reader(&mut catalog, stats.as_bytes(), "test").unwrap();
        let chase = catalog.get_stats("Ja'Marr Chase").unwrap();
        assert_eq!(chase.get("ADP"), Some(&SV::Int(0)));
        assert_eq!(chase.get("Receptions"), Some(&SV::Int(5)));
    }

    #[test]
    fn embedded_dataset_parses() {
        let mut catalog =
            load_meta_from_reader(EMBEDDED_META.as_bytes(), "embedded meta").unwrap();
        overlay_stats_from_reader(&mut catalog, EMBEDDED_STATS.as_bytes(), "embedded stats")
            .unwrap();
        assert!(catalog.len() >= 50);
        // The embedded stat table ranks the consensus top pick.
        let chase = catalog.get_stats("Ja'Marr Chase").unwrap();
        assert!(chase.get("ADP").unwrap().as_f64().unwrap() > 0.0);
    }
}
