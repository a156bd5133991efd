use crate::core::constants::{
    ENEMY_ATK_PER_ZONE, ENEMY_BASE_HP, ENEMY_DEF, ENEMY_HP_PER_ZONE, MIN_DAMAGE,
};
use crate::items::names::enemy_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub zone: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Builds the opponent for a zone. Deterministic: name and stats depend on the zone only.
pub fn generate_enemy(zone: u32) -> Enemy {
    let hp = zone
        .saturating_mul(ENEMY_HP_PER_ZONE)
        .saturating_add(ENEMY_BASE_HP);
    Enemy {
        name: enemy_name(zone).to_string(),
        hp,
        max_hp: hp,
        atk: zone.saturating_mul(ENEMY_ATK_PER_ZONE),
        def: ENEMY_DEF,
        zone,
    }
}

/// Damage after defense, never below the stalemate floor.
pub fn damage_after_defense(atk: u32, def: u32) -> u32 {
    atk.saturating_sub(def).max(MIN_DAMAGE)
}

/// What was granted for winning a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryReward {
    pub coins: u64,
    pub gems: u64,
    /// Zone the player advanced to.
    pub new_zone: u32,
    /// True when this win unlocked premium.
    pub unlocked_premium: bool,
}

/// Result of resolving one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both sides still standing.
    Continuing { damage: u32 },
    Victory { damage: u32, reward: VictoryReward },
    Defeat { damage: u32 },
}

impl TurnOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            TurnOutcome::Continuing { damage }
            | TurnOutcome::Victory { damage, .. }
            | TurnOutcome::Defeat { damage } => *damage,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, TurnOutcome::Continuing { .. })
    }
}
