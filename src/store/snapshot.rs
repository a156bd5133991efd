//! JSON encoding of the persisted profile.
//!
//! Combat fields are never written. Records from older builds decode with
//! defaults for anything they lack and are normalized so the loaded state
//! satisfies the same invariants as a live one.

use crate::character::{refresh_derived_stats, research_tier};
use crate::core::game_state::GameState;
use crate::items::{base_upgrade_cost, Armor, Gear, Weapon};

pub fn encode_snapshot(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string(&state.without_combat())
}

pub fn decode_snapshot(json: &str) -> serde_json::Result<GameState> {
    let mut state: GameState = serde_json::from_str(json)?;
    normalize(&mut state);
    Ok(state)
}

/// Items without an id can never be referenced again, so they are dropped.
fn normalize_gear<G: Gear>(items: &mut Vec<G>) {
    items.retain(|item| !item.id().is_empty());
    for item in items.iter_mut() {
        if item.name().is_empty() {
            if let Some(name) = G::name_pool(item.rarity()).first() {
                item.set_name(name);
            }
        }
        if item.level() == 0 {
            item.set_level(1);
        }
        if item.upgrade_cost() == 0 {
            item.set_upgrade_cost(base_upgrade_cost(item.rarity()));
        }
        if item.sell_price() == 0 {
            item.set_sell_price(G::base_sell_price(item.rarity()));
        }
    }
}

/// Repair a decoded profile: clear combat, fill legacy gaps, drop unusable
/// items and dangling equipped ids, then recompute derived stats.
pub fn normalize(state: &mut GameState) {
    state.current_enemy = None;
    state.in_combat = false;
    state.combat_log.clear();

    state.zone = state.zone.max(1);
    state.update_premium();
    state.research.tier = research_tier(state.research.level);

    normalize_gear::<Weapon>(&mut state.inventory.weapons);
    normalize_gear::<Armor>(&mut state.inventory.armor);
    state.inventory.drop_dangling_refs();

    refresh_derived_stats(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::start_combat;
    use crate::items::Rarity;

    #[test]
    fn test_encode_strips_combat() {
        let mut state = GameState::new();
        start_combat(&mut state).unwrap();
        let json = encode_snapshot(&state).unwrap();
        assert!(!json.contains("currentEnemy"));
        assert!(!json.contains("Goblin"));

        let loaded = decode_snapshot(&json).unwrap();
        assert!(!loaded.in_combat);
        assert!(loaded.current_enemy.is_none());
        assert!(loaded.combat_log.is_empty());
    }

    #[test]
    fn test_decode_legacy_record() {
        // Shape written by the first browser build: embedded equipped item,
        // no sell prices, no research, no premium flag, no baseHp.
        let json = r#"{
            "coins": 320,
            "gems": 14,
            "zone": 7,
            "playerStats": {"hp": 180, "maxHp": 200, "atk": 67, "def": 0, "baseAtk": 50, "baseDef": 0},
            "inventory": {
                "weapons": [{"id": "k3j9x0a1b", "name": "Rusty Sword", "rarity": "common", "baseAtk": 17, "level": 1, "upgradeCost": 5}],
                "armor": [],
                "currentWeapon": {"id": "k3j9x0a1b", "name": "Rusty Sword", "rarity": "common", "baseAtk": 17, "level": 1, "upgradeCost": 5},
                "currentArmor": null
            },
            "currentEnemy": null,
            "inCombat": false,
            "combatLog": []
        }"#;

        let state = decode_snapshot(json).unwrap();
        assert_eq!(state.coins, 320);
        assert_eq!(state.gems, 14);
        assert_eq!(state.zone, 7);
        assert_eq!(state.player_stats.base_hp, 200);
        assert_eq!(state.player_stats.atk, 67);
        assert_eq!(state.player_stats.hp, 180);
        assert_eq!(state.inventory.current_weapon.as_deref(), Some("k3j9x0a1b"));
        assert_eq!(state.inventory.weapons[0].sell_price, 10);
        assert_eq!(state.inventory.weapons[0].rarity, Rarity::Common);
        assert_eq!(state.research.level, 0);
        assert!(!state.is_premium);
    }

    #[test]
    fn test_normalize_drops_dangling_refs_and_recomputes() {
        let mut state = GameState::new();
        state.inventory.current_weapon = Some("missing".to_string());
        state.player_stats.atk = 999;
        state.player_stats.hp = 5000;
        normalize(&mut state);
        assert_eq!(state.inventory.current_weapon, None);
        assert_eq!(state.player_stats.atk, 50);
        assert_eq!(state.player_stats.hp, 200);
    }

    #[test]
    fn test_normalize_latches_premium_from_zone() {
        let mut state = GameState::new();
        state.zone = 64;
        normalize(&mut state);
        assert!(state.is_premium);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_snapshot("not json").is_err());
        assert!(decode_snapshot("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_legacy_item_without_upgrade_cost_gets_table_cost() {
        let json = r#"{
            "inventory": {
                "weapons": [{"id": "w1", "name": "Frostbite", "rarity": "epic", "baseAtk": 44}],
                "armor": [{"id": "a1", "name": "Chainmail", "rarity": "rare", "baseDef": 16, "upgradeCost": 0}]
            }
        }"#;
        let state = decode_snapshot(json).unwrap();
        assert_eq!(state.inventory.weapons[0].upgrade_cost, 20);
        assert_eq!(state.inventory.armor[0].upgrade_cost, 10);
        assert_eq!(state.inventory.armor[0].sell_price, 20);
    }

    #[test]
    fn test_partial_items_repaired_and_idless_items_dropped() {
        let json = r#"{
            "coins": 250,
            "inventory": {
                "weapons": [{"id": "w1", "rarity": "rare"}, {"name": "Nameless Blade", "baseAtk": 30}],
                "armor": [{"id": "a1"}],
                "currentWeapon": "w1"
            }
        }"#;
        let state = decode_snapshot(json).unwrap();
        assert_eq!(state.coins, 250);
        assert_eq!(state.inventory.weapons.len(), 1);

        let weapon = &state.inventory.weapons[0];
        assert_eq!(weapon.name, "Steel Blade");
        assert_eq!(weapon.level, 1);
        assert_eq!(weapon.sell_price, 25);
        assert_eq!(state.inventory.current_weapon.as_deref(), Some("w1"));

        let armor = &state.inventory.armor[0];
        assert_eq!(armor.rarity, Rarity::Common);
        assert_eq!(armor.name, "Leather Vest");
    }

    #[test]
    fn test_extreme_record_loads_without_overflow() {
        let json = r#"{
            "zone": 900000000,
            "playerStats": {"baseAtk": 4294967295, "baseDef": 4294967295, "baseHp": 4294967295},
            "research": {"level": 4294967295},
            "inventory": {
                "weapons": [{"id": "w", "name": "Oblivion", "rarity": "mythical", "baseAtk": 4294967295, "level": 500000000, "upgradeCost": 18446744073709551615, "sellPrice": 18446744073709551615}],
                "armor": [{"id": "a", "name": "Aegis of Ages", "rarity": "mythical", "baseDef": 60, "level": 4294967295}],
                "currentWeapon": "w",
                "currentArmor": "a"
            }
        }"#;
        let state = decode_snapshot(json).unwrap();
        assert_eq!(state.zone, 900_000_000);
        assert!(state.is_premium);
        assert_eq!(state.player_stats.atk, u32::MAX);
        assert_eq!(state.player_stats.def, u32::MAX);
        assert_eq!(state.player_stats.max_hp, u32::MAX);
        assert_eq!(state.research.tier, 429_496_729);
    }
}
