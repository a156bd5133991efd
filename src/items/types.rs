use crate::core::constants::{
    ARMOR_DEF_PER_LEVEL, ARMOR_SELL_PRICE, ITEM_UPGRADE_COST, SELL_PRICE_MULT, UPGRADE_COST_MULT,
    WEAPON_ATK_PER_LEVEL, WEAPON_SELL_PRICE,
};
use super::names::{armor_names, weapon_names};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythical = 4,
}

impl Rarity {
    /// All rarities in table order. Rarity rolls walk this order, so ties
    /// resolve to the earlier entry.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Index into the per-rarity tables in `core::constants`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name for this rarity tier.
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }
}

/// Upgrade cost after one more level. Always strictly greater than `cost`.
pub fn next_upgrade_cost(cost: u64) -> u64 {
    let (num, den) = UPGRADE_COST_MULT;
    (cost.saturating_mul(num) / den).max(cost.saturating_add(1))
}

pub fn next_sell_price(price: u64) -> u64 {
    let (num, den) = SELL_PRICE_MULT;
    price.saturating_mul(num) / den
}

/// Records missing any field still load; normalization repairs the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub base_atk: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    /// Older saves have no sell price; snapshot normalization fills it in.
    pub sell_price: u64,
    #[serde(rename = "isChroma")]
    pub chroma: bool,
}

/// Records missing any field still load; normalization repairs the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Armor {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub base_def: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    pub sell_price: u64,
    #[serde(rename = "isChroma")]
    pub chroma: bool,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            rarity: Rarity::Common,
            base_atk: 0,
            level: 1,
            upgrade_cost: 0,
            sell_price: 0,
            chroma: false,
        }
    }
}

impl Default for Armor {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            rarity: Rarity::Common,
            base_def: 0,
            level: 1,
            upgrade_cost: 0,
            sell_price: 0,
            chroma: false,
        }
    }
}

/// Behaviour shared by weapons and armor so the ledger can treat both
/// collections the same way.
pub trait Gear: Clone {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn rarity(&self) -> Rarity;
    fn level(&self) -> u32;
    fn upgrade_cost(&self) -> u64;
    fn sell_price(&self) -> u64;

    /// Effective stat contribution: base + (level - 1) * per-level bonus.
    fn power(&self) -> u32;

    /// Table sell price for a fresh item of this rarity.
    fn base_sell_price(rarity: Rarity) -> u64;

    /// Names an item of this kind and rarity can be generated with.
    fn name_pool(rarity: Rarity) -> &'static [&'static str];

    fn set_name(&mut self, name: &str);
    fn set_upgrade_cost(&mut self, cost: u64);
    fn set_sell_price(&mut self, price: u64);
    fn set_level(&mut self, level: u32);

    /// Raise the level by one and scale cost and price.
    fn level_up(&mut self);
}

macro_rules! impl_gear {
    ($ty:ty, $base:ident, $per_level:expr, $sell_table:expr, $names:ident) => {
        impl Gear for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn rarity(&self) -> Rarity {
                self.rarity
            }

            fn level(&self) -> u32 {
                self.level
            }

            fn upgrade_cost(&self) -> u64 {
                self.upgrade_cost
            }

            fn sell_price(&self) -> u64 {
                self.sell_price
            }

            fn power(&self) -> u32 {
                self.level
                    .saturating_sub(1)
                    .saturating_mul($per_level)
                    .saturating_add(self.$base)
            }

            fn base_sell_price(rarity: Rarity) -> u64 {
                $sell_table[rarity.index()]
            }

            fn name_pool(rarity: Rarity) -> &'static [&'static str] {
                $names(rarity)
            }

            fn set_name(&mut self, name: &str) {
                self.name = name.to_string();
            }

            fn set_upgrade_cost(&mut self, cost: u64) {
                self.upgrade_cost = cost;
            }

            fn set_sell_price(&mut self, price: u64) {
                self.sell_price = price;
            }

            fn set_level(&mut self, level: u32) {
                self.level = level;
            }

            fn level_up(&mut self) {
                self.level = self.level.saturating_add(1);
                self.upgrade_cost = next_upgrade_cost(self.upgrade_cost);
                self.sell_price = next_sell_price(self.sell_price);
            }
        }
    };
}

impl_gear!(Weapon, base_atk, WEAPON_ATK_PER_LEVEL, WEAPON_SELL_PRICE, weapon_names);
impl_gear!(Armor, base_def, ARMOR_DEF_PER_LEVEL, ARMOR_SELL_PRICE, armor_names);

/// Default gem cost of the first upgrade for a rarity.
pub fn base_upgrade_cost(rarity: Rarity) -> u64 {
    ITEM_UPGRADE_COST[rarity.index()]
}

/// A freshly generated item of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Loot {
    Weapon(Weapon),
    Armor(Armor),
}

impl Loot {
    pub fn id(&self) -> &str {
        match self {
            Loot::Weapon(w) => &w.id,
            Loot::Armor(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Loot::Weapon(w) => &w.name,
            Loot::Armor(a) => &a.name,
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            Loot::Weapon(w) => w.rarity,
            Loot::Armor(a) => a.rarity,
        }
    }
}
