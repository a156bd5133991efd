use super::research::{apply_bonus, research_bonus_percent};
use crate::core::game_state::{GameState, PlayerStats, Research};
use crate::items::{Gear, Inventory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub atk: u32,
    pub def: u32,
    pub max_hp: u32,
}

impl DerivedStats {
    /// Calculates combat stats from base stats, equipped gear and research.
    ///
    /// Gear power is added to the base values first; the research bonus then
    /// scales attack, defense and max HP together.
    pub fn calculate(stats: &PlayerStats, inventory: &Inventory, research: &Research) -> Self {
        let weapon_power = inventory.equipped_weapon().map_or(0, |w| w.power());
        let armor_power = inventory.equipped_armor().map_or(0, |a| a.power());
        let bonus = research_bonus_percent(research.level);

        Self {
            atk: apply_bonus(stats.base_atk.saturating_add(weapon_power), bonus),
            def: apply_bonus(stats.base_def.saturating_add(armor_power), bonus),
            max_hp: apply_bonus(stats.base_hp, bonus).max(1),
        }
    }

    /// Write derived values into `stats`. Current HP is clamped down to the
    /// new maximum but never raised.
    pub fn apply_to(self, stats: &mut PlayerStats) {
        stats.atk = self.atk;
        stats.def = self.def;
        stats.max_hp = self.max_hp;
        stats.hp = stats.hp.min(self.max_hp);
    }
}

/// Recompute derived player stats from the rest of the profile.
pub fn refresh_derived_stats(state: &mut GameState) {
    DerivedStats::calculate(&state.player_stats, &state.inventory, &state.research)
        .apply_to(&mut state.player_stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Armor, Rarity, Weapon};

    fn weapon(id: &str, base_atk: u32, level: u32) -> Weapon {
        Weapon {
            id: id.to_string(),
            name: "Flamebrand".to_string(),
            rarity: Rarity::Epic,
            base_atk,
            level,
            upgrade_cost: 20,
            sell_price: 60,
            chroma: false,
        }
    }

    fn armor(id: &str, base_def: u32, level: u32) -> Armor {
        Armor {
            id: id.to_string(),
            name: "Void Armor".to_string(),
            rarity: Rarity::Epic,
            base_def,
            level,
            upgrade_cost: 20,
            sell_price: 50,
            chroma: false,
        }
    }

    #[test]
    fn test_derived_stats_base() {
        let stats = PlayerStats::default();
        let derived = DerivedStats::calculate(&stats, &Inventory::new(), &Research::default());
        assert_eq!(derived.atk, 50);
        assert_eq!(derived.def, 0);
        assert_eq!(derived.max_hp, 200);
    }

    #[test]
    fn test_derived_stats_with_equipment() {
        let mut inventory = Inventory::new();
        inventory.weapons.push(weapon("w", 40, 3));
        inventory.armor.push(armor("a", 25, 2));
        inventory.current_weapon = Some("w".to_string());
        inventory.current_armor = Some("a".to_string());

        let derived =
            DerivedStats::calculate(&PlayerStats::default(), &inventory, &Research::default());
        assert_eq!(derived.atk, 50 + 40 + 20);
        assert_eq!(derived.def, 25 + 5);
        assert_eq!(derived.max_hp, 200);
    }

    #[test]
    fn test_unequipped_items_do_not_count() {
        let mut inventory = Inventory::new();
        inventory.weapons.push(weapon("w", 40, 1));
        let derived =
            DerivedStats::calculate(&PlayerStats::default(), &inventory, &Research::default());
        assert_eq!(derived.atk, 50);
    }

    #[test]
    fn test_research_bonus_is_multiplicative() {
        let mut inventory = Inventory::new();
        inventory.weapons.push(weapon("w", 50, 1));
        inventory.current_weapon = Some("w".to_string());
        let research = Research {
            level: 10,
            tier: 1,
            total_spent: 1500,
        };

        let derived = DerivedStats::calculate(&PlayerStats::default(), &inventory, &research);
        assert_eq!(derived.atk, 110); // (50 + 50) * 1.10
        assert_eq!(derived.def, 0);
        assert_eq!(derived.max_hp, 220);
    }

    #[test]
    fn test_apply_clamps_hp_but_never_raises() {
        let mut stats = PlayerStats {
            hp: 150,
            ..PlayerStats::default()
        };
        DerivedStats {
            atk: 60,
            def: 5,
            max_hp: 220,
        }
        .apply_to(&mut stats);
        assert_eq!(stats.hp, 150);
        assert_eq!(stats.max_hp, 220);

        DerivedStats {
            atk: 60,
            def: 5,
            max_hp: 100,
        }
        .apply_to(&mut stats);
        assert_eq!(stats.hp, 100);
    }

    #[test]
    fn test_refresh_ignores_hand_edited_values() {
        let mut state = GameState::new();
        state.player_stats.atk = 9999;
        state.player_stats.def = 9999;
        refresh_derived_stats(&mut state);
        assert_eq!(state.player_stats.atk, 50);
        assert_eq!(state.player_stats.def, 0);
    }
}
