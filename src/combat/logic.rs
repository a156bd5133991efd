//! Turn resolution for the Idle -> InCombat -> Idle fight cycle.
//!
//! Each call either fails without touching the state or applies one complete
//! transition, including stat recomputation and exactly one log line.

use super::types::{damage_after_defense, generate_enemy, TurnOutcome, VictoryReward};
use crate::character::refresh_derived_stats;
use crate::core::constants::{
    VICTORY_COINS_PER_ZONE, VICTORY_COIN_JITTER, VICTORY_GEMS_MAX, VICTORY_GEMS_MIN,
};
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use rand::Rng;
use tracing::debug;

/// Begin a fight against the enemy for the current zone.
///
/// The player is healed to full first, which is also how a defeated player
/// gets back into action.
pub fn start_combat(state: &mut GameState) -> ActionResult<()> {
    if state.in_combat || state.current_enemy.is_some() {
        return Err(ActionError::AlreadyInCombat);
    }

    let enemy = generate_enemy(state.zone);
    refresh_derived_stats(state);
    state.player_stats.heal_full();
    state.combat_log.push(format!(
        "You encounter a {} in Zone {}!",
        enemy.name, enemy.zone
    ));
    debug!(zone = enemy.zone, enemy = %enemy.name, "combat started");

    state.current_enemy = Some(enemy);
    state.in_combat = true;
    Ok(())
}

/// Resolve one exchange. A hit damages the enemy; a miss lets the enemy strike.
pub fn resolve_turn(
    state: &mut GameState,
    hit: bool,
    rng: &mut impl Rng,
) -> ActionResult<TurnOutcome> {
    let mut enemy = match (&state.current_enemy, state.in_combat) {
        (Some(enemy), true) => enemy.clone(),
        _ => return Err(ActionError::NotInCombat),
    };

    if hit {
        let damage = damage_after_defense(state.player_stats.atk, enemy.def);
        enemy.take_damage(damage);

        if enemy.is_alive() {
            state.combat_log.push(format!(
                "You deal {} damage to the {}!",
                damage, enemy.name
            ));
            state.current_enemy = Some(enemy);
            return Ok(TurnOutcome::Continuing { damage });
        }

        let reward = grant_victory(state, enemy.zone, rng);
        state.combat_log.push(format!(
            "You deal {} damage and defeat the {}! You earned {} coins and {} gems.",
            damage, enemy.name, reward.coins, reward.gems
        ));
        end_combat(state);
        debug!(
            zone = reward.new_zone,
            coins = reward.coins,
            gems = reward.gems,
            "combat won"
        );
        Ok(TurnOutcome::Victory { damage, reward })
    } else {
        let damage = damage_after_defense(enemy.atk, state.player_stats.def);
        state.player_stats.take_damage(damage);

        if state.player_stats.is_alive() {
            state.combat_log.push(format!(
                "You missed! The {} deals {} damage to you!",
                enemy.name, damage
            ));
            state.current_enemy = Some(enemy);
            return Ok(TurnOutcome::Continuing { damage });
        }

        state.combat_log.push(format!(
            "You missed! The {} deals {} damage and defeats you...",
            enemy.name, damage
        ));
        end_combat(state);
        debug!(zone = state.zone, "combat lost");
        Ok(TurnOutcome::Defeat { damage })
    }
}

/// Pay out a win for a fight in `fought_zone` and advance to the next zone.
fn grant_victory(state: &mut GameState, fought_zone: u32, rng: &mut impl Rng) -> VictoryReward {
    let coins = fought_zone as u64 * VICTORY_COINS_PER_ZONE + rng.gen_range(0..=VICTORY_COIN_JITTER);
    let gems = rng.gen_range(VICTORY_GEMS_MIN..=VICTORY_GEMS_MAX);

    let was_premium = state.is_premium;
    state.coins = state.coins.saturating_add(coins);
    state.gems = state.gems.saturating_add(gems);
    state.zone = state.zone.saturating_add(1);
    state.update_premium();

    VictoryReward {
        coins,
        gems,
        new_zone: state.zone,
        unlocked_premium: !was_premium && state.is_premium,
    }
}

fn end_combat(state: &mut GameState) {
    state.current_enemy = None;
    state.in_combat = false;
}
