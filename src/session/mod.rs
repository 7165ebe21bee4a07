//! The game session: command surface over one live board.
//!
//! A session owns its board outright. Commands mutate it sequentially and
//! callers only ever see immutable snapshots, so status can never observe a
//! torn layout. Every state-changing command ends with a best-effort
//! persistence write for the active tier.

use chrono::NaiveDate;
use log::{debug, info};

use crate::core::{game_id, Difficulty, Location};
use crate::progress::{is_resumable, ProgressStore};
use crate::puzzle::generate;

pub mod board;

pub use board::{Board, Status};

/// Source of the current wall-clock time, in epoch millis.
///
/// Sessions never read the clock directly; tests substitute a fixed one.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// The process clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as i64)
    }
}

/// One player's session over today's puzzles.
///
/// Construction runs the startup chain: Easy's saved progress decides
/// whether Medium is unlocked and checked, which in turn decides Hard; the
/// active tier starts at the highest tier reached, resumed from its record
/// when that record still matches today's puzzle.
pub struct GameSession<S: ProgressStore, C: Clock> {
    store: S,
    clock: C,
    today: NaiveDate,
    game_id: i32,
    tier: Difficulty,
    board: Board,
    unlocked: Vec<Difficulty>,
}

impl<S: ProgressStore, C: Clock> GameSession<S, C> {
    /// Start a session for `today`, reconciling persisted progress.
    pub fn new(mut store: S, clock: C, today: NaiveDate) -> Self {
        let id = game_id(today);
        let mut unlocked = vec![Difficulty::Easy];
        let mut tier = Difficulty::Easy;

        let easy = generate(today, Difficulty::Easy);
        let saved = store.read(Difficulty::Easy);
        if is_resumable(&easy, &saved, id) && saved.solved {
            unlocked.push(Difficulty::Medium);
            tier = Difficulty::Medium;

            let medium = generate(today, Difficulty::Medium);
            let saved = store.read(Difficulty::Medium);
            if is_resumable(&medium, &saved, id) && saved.solved {
                unlocked.push(Difficulty::Hard);
                tier = Difficulty::Hard;
            }
        }

        let board = Self::load_board(&mut store, &clock, today, id, tier);
        info!("session ready: game {id}, starting at {}", tier.storage_key());
        Self {
            store,
            clock,
            today,
            game_id: id,
            tier,
            board,
            unlocked,
        }
    }

    /// Resume the tier's board from its record, or start fresh and persist.
    fn load_board(store: &mut S, clock: &C, today: NaiveDate, id: i32, tier: Difficulty) -> Board {
        let puzzle = generate(today, tier);
        let record = store.read(tier);
        if is_resumable(&puzzle, &record, id) {
            debug!("resuming {} from saved progress", tier.storage_key());
            Board::resume(puzzle, &record)
        } else {
            debug!("starting {} fresh", tier.storage_key());
            let board = Board::fresh(puzzle, clock.now_millis());
            store.write(tier, board.to_record(id));
            board
        }
    }

    // === Snapshots ===

    /// The active tier's board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active tier.
    #[must_use]
    pub fn tier(&self) -> Difficulty {
        self.tier
    }

    /// Tiers the player may select, in progression order.
    #[must_use]
    pub fn unlocked_tiers(&self) -> &[Difficulty] {
        &self.unlocked
    }

    /// Today's game id.
    #[must_use]
    pub fn game_id(&self) -> i32 {
        self.game_id
    }

    // === Commands ===

    /// Relocate one token, then re-derive status and persist.
    ///
    /// Ignored once the board has passed; an explicit reset or tier switch
    /// is required to play on. A failed board stays live: moves keep
    /// applying and may return it to solving or forward to passed.
    ///
    /// On the transition into `Passed` the solve time is captured and the
    /// solved tier's unlocks are added.
    ///
    /// # Panics
    ///
    /// Panics if a location's index is out of range for its zone.
    pub fn move_token(&mut self, source: Location, dest: Location) {
        if self.board.status == Status::Passed {
            return;
        }
        if !self.board.relocate(source, dest) {
            return;
        }

        let prior = self.board.status;
        self.board.status = self.board.derive_status();
        if self.board.status == Status::Passed && prior != Status::Passed {
            let elapsed_secs = (self.clock.now_millis() - self.board.start_time) / 1000;
            self.board.time_to_solve = format_elapsed(elapsed_secs);
            info!(
                "{} solved in {}",
                self.tier.storage_key(),
                self.board.time_to_solve
            );
            for &tier in self.tier.unlocked_after_solve() {
                if !self.unlocked.contains(&tier) {
                    self.unlocked.push(tier);
                }
            }
        }
        self.persist();
    }

    /// Switch to a tier, resuming its progress when still valid.
    ///
    /// A no-op when the tier is already active.
    pub fn select_tier(&mut self, tier: Difficulty) {
        if tier == self.tier {
            return;
        }
        debug!("switching to {}", tier.storage_key());
        self.board = Self::load_board(&mut self.store, &self.clock, self.today, self.game_id, tier);
        self.tier = tier;
    }

    /// Move on to the next tier up; a no-op at the top.
    pub fn advance_tier(&mut self) {
        if let Some(next) = self.tier.successor() {
            self.select_tier(next);
        }
    }

    /// Discard any progress on a tier and start its board over.
    pub fn reset_tier(&mut self, tier: Difficulty) {
        debug!("resetting {}", tier.storage_key());
        self.tier = tier;
        self.board = Board::fresh(generate(self.today, tier), self.clock.now_millis());
        self.persist();
    }

    fn persist(&mut self) {
        let record = self.board.to_record(self.game_id);
        self.store.write(self.tier, record);
    }
}

/// Render whole seconds as `"42s"`, `"1m 30s"`, `"1h 2m 3s"`; zero
/// components are omitted and only an all-zero duration reads `"0s"`.
fn format_elapsed(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 || out.is_empty() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{seconds}s"));
    }
    out
}
