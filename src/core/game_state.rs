use super::constants::*;
use crate::combat::types::Enemy;
use crate::items::inventory::Inventory;
use serde::{Deserialize, Serialize};

/// Player combat stats.
///
/// `atk`, `def` and `max_hp` are derived from the base stats, the equipped
/// gear and research; see `character::derived_stats`. Never edit them by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub base_atk: u32,
    pub base_def: u32,
    pub base_hp: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: BASE_HP,
            max_hp: BASE_HP,
            atk: BASE_ATK,
            def: BASE_DEF,
            base_atk: BASE_ATK,
            base_def: BASE_DEF,
            base_hp: BASE_HP,
        }
    }
}

impl PlayerStats {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal_full(&mut self) {
        self.hp = self.max_hp;
    }
}

/// Permanent coin-funded stat research.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Research {
    pub level: u32,
    /// Always `level / RESEARCH_LEVELS_PER_TIER`.
    pub tier: u32,
    pub total_spent: u64,
}

/// The whole player profile.
///
/// Combat fields are transient: they are skipped when serializing and come
/// back empty on load, so a fight never survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub coins: u64,
    pub gems: u64,
    pub zone: u32,
    pub player_stats: PlayerStats,
    pub inventory: Inventory,
    /// Current opponent (transient, not saved)
    #[serde(skip)]
    pub current_enemy: Option<Enemy>,
    /// Always equal to `current_enemy.is_some()` (transient, not saved)
    #[serde(skip)]
    pub in_combat: bool,
    /// One line per combat event (transient, not saved)
    #[serde(skip)]
    pub combat_log: Vec<String>,
    pub research: Research,
    /// Set once `zone` reaches `PREMIUM_ZONE`; never cleared.
    pub is_premium: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a fresh profile with the compiled-in defaults.
    pub fn new() -> Self {
        Self {
            coins: STARTING_COINS,
            gems: STARTING_GEMS,
            zone: STARTING_ZONE,
            player_stats: PlayerStats::default(),
            inventory: Inventory::new(),
            current_enemy: None,
            in_combat: false,
            combat_log: Vec::new(),
            research: Research::default(),
            is_premium: false,
        }
    }

    /// Copy of this state with combat cleared, as it would be persisted.
    pub fn without_combat(&self) -> Self {
        Self {
            current_enemy: None,
            in_combat: false,
            combat_log: Vec::new(),
            ..self.clone()
        }
    }

    /// Last `count` combat log lines, oldest first.
    pub fn recent_log(&self, count: usize) -> &[String] {
        let start = self.combat_log.len().saturating_sub(count);
        &self.combat_log[start..]
    }

    /// Latch the premium flag if the zone has reached the threshold.
    pub fn update_premium(&mut self) {
        if self.zone >= PREMIUM_ZONE {
            self.is_premium = true;
        }
    }
}
