//! The single owner of the live profile.
//!
//! Every mutation runs against a working copy of the current state and is
//! committed in one step only when the transition succeeds, so a failed
//! action can never leave a partial change behind. After each commit the
//! state is written to the backing store; write failures are logged and the
//! in-memory state stays authoritative.

use super::backend::KeyValueStore;
use super::snapshot::{decode_snapshot, encode_snapshot};
use crate::combat::{self, TurnOutcome};
use crate::core::constants::STORAGE_KEY;
use crate::core::error::ActionResult;
use crate::core::game_state::GameState;
use crate::economy::{self, ChestReward};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

pub struct ProfileStore<B: KeyValueStore> {
    backend: B,
    state: GameState,
    version: u64,
    rng: StdRng,
}

impl<B: KeyValueStore> ProfileStore<B> {
    /// Restore the saved profile, or start fresh if there is none or it
    /// cannot be read.
    pub fn open(backend: B) -> Self {
        Self::with_rng(backend, StdRng::from_entropy())
    }

    /// Like `open`, with a reproducible random source.
    pub fn with_seed(backend: B, seed: u64) -> Self {
        Self::with_rng(backend, StdRng::seed_from_u64(seed))
    }

    fn with_rng(backend: B, rng: StdRng) -> Self {
        let state = load_state(&backend);
        Self {
            backend,
            state,
            version: 0,
            rng,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Bumped on every committed change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn recent_log(&self, count: usize) -> &[String] {
        self.state.recent_log(count)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Run `transition` on a copy of the state and commit it on success.
    fn apply<T>(
        &mut self,
        transition: impl FnOnce(&mut GameState, &mut StdRng) -> ActionResult<T>,
    ) -> ActionResult<T> {
        let mut next = self.state.clone();
        let value = transition(&mut next, &mut self.rng)?;
        self.state = next;
        self.version += 1;
        self.persist();
        Ok(value)
    }

    fn persist(&mut self) {
        let json = match encode_snapshot(&self.state) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode profile, skipping save");
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            warn!(error = %e, "failed to save profile, skipping");
        }
    }

    pub fn start_combat(&mut self) -> ActionResult<()> {
        self.apply(|state, _| combat::start_combat(state))
    }

    pub fn resolve_turn(&mut self, hit: bool) -> ActionResult<TurnOutcome> {
        self.apply(|state, rng| combat::resolve_turn(state, hit, rng))
    }

    pub fn equip_weapon(&mut self, id: &str) -> ActionResult<()> {
        self.apply(|state, _| economy::equip_weapon(state, id))
    }

    pub fn equip_armor(&mut self, id: &str) -> ActionResult<()> {
        self.apply(|state, _| economy::equip_armor(state, id))
    }

    pub fn upgrade_weapon(&mut self, id: &str) -> ActionResult<u32> {
        self.apply(|state, _| economy::upgrade_weapon(state, id))
    }

    pub fn upgrade_armor(&mut self, id: &str) -> ActionResult<u32> {
        self.apply(|state, _| economy::upgrade_armor(state, id))
    }

    pub fn sell_weapon(&mut self, id: &str) -> ActionResult<u64> {
        self.apply(|state, _| economy::sell_weapon(state, id))
    }

    pub fn sell_armor(&mut self, id: &str) -> ActionResult<u64> {
        self.apply(|state, _| economy::sell_armor(state, id))
    }

    pub fn upgrade_research(&mut self) -> ActionResult<u32> {
        self.apply(|state, _| economy::upgrade_research(state))
    }

    pub fn open_chest(&mut self, cost: u64) -> ActionResult<ChestReward> {
        self.apply(|state, rng| economy::open_chest(state, cost, rng))
    }

    /// Delete the saved record and go back to a fresh profile.
    pub fn reset_game(&mut self) {
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to delete saved profile");
        }
        self.state = GameState::new();
        self.version += 1;
        info!("profile reset");
    }
}

fn load_state<B: KeyValueStore>(backend: &B) -> GameState {
    match backend.get(STORAGE_KEY) {
        Ok(Some(json)) => match decode_snapshot(&json) {
            Ok(state) => {
                info!(zone = state.zone, coins = state.coins, "profile restored");
                state
            }
            Err(e) => {
                warn!(error = %e, "saved profile is corrupt, starting fresh");
                GameState::new()
            }
        },
        Ok(None) => GameState::new(),
        Err(e) => {
            warn!(error = %e, "failed to read saved profile, starting fresh");
            GameState::new()
        }
    }
}
