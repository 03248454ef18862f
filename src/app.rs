// Application state and orchestration.
//
// Binds the player catalog and the draft session behind one handle and
// exposes the combined operations the front ends call. Purely synchronous:
// every front-end action is a direct call, there is no core-side event loop.

use tracing::{info, warn};

use crate::catalog::{CatalogError, MediaRef, Player, PlayerCatalog};
use crate::config::Config;
use crate::draft::pick::Slot;
use crate::draft::state::{DraftError, DraftSession};

/// The result of drafting a player through the app layer: the filled slot
/// plus the presentation hints (media reference, catalog membership).
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    pub slot: Slot,
    pub team_name: String,
    pub pick_number: u32,
    pub draft_complete: bool,
    /// Highlight media for the drafted player, if the catalog has one.
    /// `None` degrades to "no highlight available", never an error.
    pub media: Option<MediaRef>,
}

/// The complete application state: configuration, catalog, and session.
pub struct App {
    pub config: Config,
    pub catalog: PlayerCatalog,
    pub session: DraftSession,
}

impl App {
    pub fn new(config: Config, catalog: PlayerCatalog) -> Self {
        App {
            config,
            catalog,
            session: DraftSession::new(),
        }
    }

    /// Start (or restart) the draft with the configured teams and rounds.
    pub fn start_draft(&mut self) -> Result<(), DraftError> {
        self.session.start(self.config.draft_config())
    }

    /// The slot and team currently on the clock.
    pub fn next_up(&self) -> Result<(Slot, &str), DraftError> {
        let slot = self.session.current_slot()?;
        Ok((slot, self.session.team_names()[slot.team].as_str()))
    }

    /// Commit a pick and resolve its presentation hints.
    ///
    /// Names unknown to the catalog are still draftable (keepers, deep
    /// sleepers, typos the user insists on); they just come back without a
    /// highlight reference.
    pub fn draft_player(&mut self, player_name: &str) -> Result<PickOutcome, DraftError> {
        let committed = self.session.commit_pick(player_name)?;
        let name = player_name.trim();

        if !self.catalog.contains(name) {
            warn!("drafted player '{}' is not in the catalog", name);
        }
        let media = self.catalog.media(name).cloned();

        info!(
            "pick {}: {} to {} ({})",
            committed.pick_number, name, committed.team_name, committed.slot
        );

        Ok(PickOutcome {
            slot: committed.slot,
            team_name: committed.team_name,
            pick_number: committed.pick_number,
            draft_complete: committed.draft_complete,
            media,
        })
    }

    /// Undrafted players, ADP order. The data behind both front ends'
    /// available-players tables.
    pub fn available(&self) -> Vec<&Player> {
        self.catalog.list_available(self.session.drafted())
    }

    /// Edit one stat cell. The raw string is coerced by the catalog.
    pub fn edit_stat(&mut self, name: &str, field: &str, raw: &str) -> Result<(), CatalogError> {
        self.catalog.set_stat(name, field, raw)?;
        info!("stat edit: {} / {} = {}", name, field, raw);
        Ok(())
    }
}
