//! Currency-gated changes to owned gear and research.
//!
//! Every operation validates before it mutates: an `Err` means the state
//! was not touched at all.

use crate::character::{refresh_derived_stats, research_tier};
use crate::core::constants::RESEARCH_COST;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::items::{Armor, Stowed, Weapon};

fn position_of<G: Stowed>(state: &GameState, id: &str) -> ActionResult<usize> {
    G::collection(&state.inventory)
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| ActionError::UnknownItem(id.to_string()))
}

/// Wear an owned item. Replaces whatever was worn in that slot.
pub fn equip<G: Stowed>(state: &mut GameState, id: &str) -> ActionResult<()> {
    position_of::<G>(state, id)?;
    *G::slot(&mut state.inventory).equipped = Some(id.to_string());
    refresh_derived_stats(state);
    Ok(())
}

/// Spend gems to raise an item one level. Returns the new level.
pub fn upgrade<G: Stowed>(state: &mut GameState, id: &str) -> ActionResult<u32> {
    let index = position_of::<G>(state, id)?;
    let cost = G::collection(&state.inventory)[index].upgrade_cost();
    if state.gems < cost {
        return Err(ActionError::InsufficientGems {
            needed: cost,
            available: state.gems,
        });
    }

    state.gems -= cost;
    let slot = G::slot(&mut state.inventory);
    let item = &mut slot.items[index];
    item.level_up();
    let level = item.level();
    refresh_derived_stats(state);
    Ok(level)
}

/// Sell an unequipped item for its sell price. Returns the coins credited.
pub fn sell<G: Stowed>(state: &mut GameState, id: &str) -> ActionResult<u64> {
    let index = position_of::<G>(state, id)?;
    if G::equipped_id(&state.inventory) == Some(id) {
        return Err(ActionError::ItemEquipped(id.to_string()));
    }

    let item = G::slot(&mut state.inventory).items.remove(index);
    state.coins = state.coins.saturating_add(item.sell_price());
    Ok(item.sell_price())
}

pub fn equip_weapon(state: &mut GameState, id: &str) -> ActionResult<()> {
    equip::<Weapon>(state, id)
}

pub fn equip_armor(state: &mut GameState, id: &str) -> ActionResult<()> {
    equip::<Armor>(state, id)
}

pub fn upgrade_weapon(state: &mut GameState, id: &str) -> ActionResult<u32> {
    upgrade::<Weapon>(state, id)
}

pub fn upgrade_armor(state: &mut GameState, id: &str) -> ActionResult<u32> {
    upgrade::<Armor>(state, id)
}

pub fn sell_weapon(state: &mut GameState, id: &str) -> ActionResult<u64> {
    sell::<Weapon>(state, id)
}

pub fn sell_armor(state: &mut GameState, id: &str) -> ActionResult<u64> {
    sell::<Armor>(state, id)
}

/// Buy one research level. Returns the new level.
pub fn upgrade_research(state: &mut GameState) -> ActionResult<u32> {
    if state.coins < RESEARCH_COST {
        return Err(ActionError::InsufficientCoins {
            needed: RESEARCH_COST,
            available: state.coins,
        });
    }

    state.coins -= RESEARCH_COST;
    state.research.level = state.research.level.saturating_add(1);
    state.research.tier = research_tier(state.research.level);
    state.research.total_spent = state.research.total_spent.saturating_add(RESEARCH_COST);
    refresh_derived_stats(state);
    Ok(state.research.level)
}
