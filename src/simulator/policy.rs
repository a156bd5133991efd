//! The scripted player's between-fight decisions.
//!
//! Everything goes through `ProfileStore`, so a rejected action is simply
//! skipped, exactly as a real client would see it.

use super::report::RunStats;
use crate::core::constants::RESEARCH_COST;
use crate::economy::ChestTier;
use crate::items::{Armor, Stowed, Weapon};
use crate::store::{KeyValueStore, ProfileStore};

fn strongest<G: Stowed>(items: &[G]) -> Option<String> {
    items
        .iter()
        .max_by_key(|item| item.power())
        .map(|item| item.id().to_string())
}

fn surplus<G: Stowed>(items: &[G], equipped: Option<&str>) -> Vec<String> {
    items
        .iter()
        .filter(|item| Some(item.id()) != equipped)
        .map(|item| item.id().to_string())
        .collect()
}

/// Spend what the last fight earned.
pub fn manage_between_fights<B: KeyValueStore>(
    store: &mut ProfileStore<B>,
    research_reserve: u64,
    stats: &mut RunStats,
) {
    while store.state().coins >= RESEARCH_COST + research_reserve {
        if store.upgrade_research().is_err() {
            break;
        }
    }

    let coins = store.state().coins;
    if let Some(tier) = ChestTier::ALL.into_iter().rev().find(|t| t.cost() <= coins) {
        if store.open_chest(tier.cost()).is_ok() {
            stats.chests_opened += 1;
        }
    }

    let inventory = &store.state().inventory;
    let best_weapon = strongest::<Weapon>(&inventory.weapons);
    let best_armor = strongest::<Armor>(&inventory.armor);
    if let Some(id) = best_weapon {
        if inventory.current_weapon.as_deref() != Some(id.as_str())
            && store.equip_weapon(&id).is_ok()
        {
            stats.gear_swaps += 1;
        }
    }
    if let Some(id) = best_armor {
        if store.state().inventory.current_armor.as_deref() != Some(id.as_str())
            && store.equip_armor(&id).is_ok()
        {
            stats.gear_swaps += 1;
        }
    }

    if let Some(id) = store.state().inventory.current_weapon.clone() {
        while store.upgrade_weapon(&id).is_ok() {
            stats.upgrades += 1;
        }
    }

    let inventory = &store.state().inventory;
    let weapons = surplus::<Weapon>(&inventory.weapons, inventory.current_weapon.as_deref());
    let armor = surplus::<Armor>(&inventory.armor, inventory.current_armor.as_deref());
    for id in weapons {
        if let Ok(coins) = store.sell_weapon(&id) {
            stats.coins_from_sales += coins;
        }
    }
    for id in armor {
        if let Ok(coins) = store.sell_armor(&id) {
            stats.coins_from_sales += coins;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::STORAGE_KEY;
    use crate::core::game_state::GameState;
    use crate::store::{encode_snapshot, MemoryStore};

    #[test]
    fn test_policy_equips_best_and_sells_rest() {
        let mut store = ProfileStore::with_seed(MemoryStore::new(), 9);
        let mut stats = RunStats::default();
        manage_between_fights(&mut store, 400, &mut stats);

        let state = store.state();
        assert_eq!(stats.chests_opened, 1);
        assert!(stats.gear_swaps >= 1);
        assert_eq!(state.research.level, 0);
        assert!(!state.inventory.weapons.is_empty() || !state.inventory.armor.is_empty());
        assert!(state.inventory.weapons.len() <= 1);
        assert!(state.inventory.armor.len() <= 1);
        if !state.inventory.weapons.is_empty() {
            assert!(state.inventory.current_weapon.is_some());
        }
        if !state.inventory.armor.is_empty() {
            assert!(state.inventory.current_armor.is_some());
        }
    }

    #[test]
    fn test_policy_buys_research_above_reserve() {
        let mut state = GameState::new();
        state.coins = 1000;
        let mut backend = MemoryStore::new();
        backend
            .set(STORAGE_KEY, &encode_snapshot(&state).unwrap())
            .unwrap();

        let mut store = ProfileStore::with_seed(backend, 9);
        let mut stats = RunStats::default();
        manage_between_fights(&mut store, 400, &mut stats);

        // 1000 -> 400 after four purchases, then the Epic chest.
        assert_eq!(store.state().research.level, 4);
        assert_eq!(stats.chests_opened, 1);
        assert_eq!(store.state().gems, 4);
    }
}
