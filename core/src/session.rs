use alloc::string::String;
use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::*;

/// What [`Session::populate`] did with the saved card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Populate {
    Restored { age_secs: i64 },
    /// Nothing usable was saved, a fresh deal is needed.
    Load,
}

/// One open card: where its clues come from and what is on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    clues: String,
    board: Board,
    generation: u32,
}

impl Session {
    pub fn new(clues: impl Into<String>) -> Self {
        Self {
            clues: clues.into(),
            board: Board::new(),
            generation: 0,
        }
    }

    pub fn clues(&self) -> &str {
        &self.clues
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Id of the most recent clue load, see [`Session::begin_load`].
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Restores the saved card if it is fresh enough.
    pub fn populate(
        &mut self,
        store: &(impl KeyValueStore + ?Sized),
        now: DateTime<Utc>,
        tracker: &(impl Tracker + ?Sized),
    ) -> Populate {
        let snapshot = match Snapshot::load(store) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                log::debug!("no saved board");
                return Populate::Load;
            }
            Err(err) => {
                log::warn!("discarding saved board: {}", err);
                return Populate::Load;
            }
        };

        let age_secs = snapshot.age_secs(now);
        if snapshot.is_stale(now) {
            log::debug!("saved board is stale ({}s old)", age_secs);
            return Populate::Load;
        }
        if snapshot.is_blank() {
            log::debug!("saved board was never dealt");
            return Populate::Load;
        }

        if let Err(err) = self.board.fill(&snapshot.entries) {
            log::warn!("discarding saved board: {}", err);
            return Populate::Load;
        }
        log::debug!("restored board saved {}s ago", age_secs);
        tracker.track(&Event::Restore { age_secs });
        Populate::Restored { age_secs }
    }

    /// Starts a new clue load and returns its generation.
    pub fn begin_load(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// User asked for a new card. Persistence is skipped, the caller fetches fresh clues.
    pub fn reset(&mut self, tracker: &(impl Tracker + ?Sized)) -> u32 {
        tracker.track(&Event::Reset);
        self.begin_load()
    }

    /// Deals `clues` onto the card, returning `Ok(false)` when a newer load was started
    /// after `generation`.
    pub fn apply_clues<R: Rng + ?Sized>(
        &mut self,
        generation: u32,
        clues: Vec<String>,
        rng: &mut R,
        tracker: &(impl Tracker + ?Sized),
    ) -> Result<bool> {
        if generation != self.generation {
            log::debug!(
                "dropping clues from load {}, current is {}",
                generation,
                self.generation
            );
            return Ok(false);
        }

        let entries = deal(clues, rng)?;
        tracker.track(&Event::Load {
            resource: self.clues.clone(),
        });
        self.board.fill(&entries)?;
        Ok(true)
    }

    /// Flips the mark on cell `index`, placing the dauber at `offset` of its width.
    pub fn toggle(
        &mut self,
        index: usize,
        offset: f64,
        tracker: &(impl Tracker + ?Sized),
    ) -> Result<bool> {
        let cell = self
            .board
            .cell_mut(index)
            .ok_or(BingoError::InvalidIndex(index))?;

        let marked = cell.toggle();
        if marked {
            tracker.track(&Event::Mark {
                text: cell.text.clone(),
            });
        }
        cell.stamp_at(offset);
        Ok(marked)
    }

    /// Writes the card to `store`. A card that was never dealt is not written.
    pub fn save(&self, store: &mut (impl KeyValueStore + ?Sized), now: DateTime<Utc>) -> Result<()> {
        if self.board.is_blank() {
            log::debug!("not saving a card that was never dealt");
            return Ok(());
        }
        Snapshot::capture(&self.board, now).store(store)
    }
}
