use crate::core::constants::{
    BASIC_CHEST, CHEST_MAX_ITEMS, CHEST_MIN_ITEMS, EPIC_CHEST, LEGENDARY_CHEST, RARE_CHEST,
};
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::items::{generate_item_id, generate_loot, Inventory, Loot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The chests on sale, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChestTier {
    Basic,
    Rare,
    Epic,
    Legendary,
}

impl ChestTier {
    pub const ALL: [ChestTier; 4] = [
        ChestTier::Basic,
        ChestTier::Rare,
        ChestTier::Epic,
        ChestTier::Legendary,
    ];

    fn table(self) -> (u64, u64) {
        match self {
            ChestTier::Basic => BASIC_CHEST,
            ChestTier::Rare => RARE_CHEST,
            ChestTier::Epic => EPIC_CHEST,
            ChestTier::Legendary => LEGENDARY_CHEST,
        }
    }

    pub fn cost(self) -> u64 {
        self.table().0
    }

    pub fn gem_bonus(self) -> u64 {
        self.table().1
    }

    pub fn from_cost(cost: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.cost() == cost)
    }

    /// Only the top chest rolls on the elite table, and only for premium profiles.
    pub fn uses_elite_table(self, is_premium: bool) -> bool {
        self == ChestTier::Legendary && is_premium
    }

    pub fn name(self) -> &'static str {
        match self {
            ChestTier::Basic => "Basic Chest",
            ChestTier::Rare => "Rare Chest",
            ChestTier::Epic => "Epic Chest",
            ChestTier::Legendary => "Legendary Chest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Weapon,
    Armor,
    Gems,
}

/// What a chest produced. Not part of the saved profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestReward {
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub items: Vec<Loot>,
    pub gems: u64,
}

impl ChestReward {
    fn new(items: Vec<Loot>, gems: u64) -> Self {
        let weapons = items
            .iter()
            .filter(|loot| matches!(loot, Loot::Weapon(_)))
            .count();
        let kind = if items.is_empty() {
            RewardKind::Gems
        } else if weapons * 2 >= items.len() {
            RewardKind::Weapon
        } else {
            RewardKind::Armor
        };
        Self { kind, items, gems }
    }
}

fn reroll_id_if_taken(loot: &mut Loot, inventory: &Inventory, rng: &mut impl Rng) {
    while inventory.contains_id(loot.id()) {
        let id = generate_item_id(rng);
        match loot {
            Loot::Weapon(weapon) => weapon.id = id,
            Loot::Armor(armor) => armor.id = id,
        }
    }
}

/// Buy the chest priced at `cost` and add its contents to the inventory.
pub fn open_chest(
    state: &mut GameState,
    cost: u64,
    rng: &mut impl Rng,
) -> ActionResult<ChestReward> {
    let tier = ChestTier::from_cost(cost).ok_or(ActionError::UnknownChest(cost))?;
    if state.coins < cost {
        return Err(ActionError::InsufficientCoins {
            needed: cost,
            available: state.coins,
        });
    }

    let elite = tier.uses_elite_table(state.is_premium);
    let count = rng.gen_range(CHEST_MIN_ITEMS..=CHEST_MAX_ITEMS);

    state.coins -= cost;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let mut loot = generate_loot(elite, rng);
        reroll_id_if_taken(&mut loot, &state.inventory, rng);
        match &loot {
            Loot::Weapon(weapon) => state.inventory.weapons.push(weapon.clone()),
            Loot::Armor(armor) => state.inventory.armor.push(armor.clone()),
        }
        items.push(loot);
    }
    state.gems = state.gems.saturating_add(tier.gem_bonus());

    debug!(chest = tier.name(), items = items.len(), elite, "chest opened");
    Ok(ChestReward::new(items, tier.gem_bonus()))
}
