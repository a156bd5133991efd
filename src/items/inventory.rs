use super::types::{Armor, Gear, Weapon};
use serde::{Deserialize, Deserializer, Serialize};

/// Owned gear plus which piece of each kind is worn.
///
/// The equipped slots hold item ids, never copies, so an upgrade to an
/// owned item is visible through the equipped slot immediately. A set id
/// must name an item in the matching collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inventory {
    pub weapons: Vec<Weapon>,
    pub armor: Vec<Armor>,
    #[serde(deserialize_with = "deserialize_item_ref")]
    pub current_weapon: Option<String>,
    #[serde(deserialize_with = "deserialize_item_ref")]
    pub current_armor: Option<String>,
}

/// Older saves embedded the whole equipped item instead of its id.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemRef {
    Id(String),
    Embedded { id: String },
}

fn deserialize_item_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ItemRef>::deserialize(deserializer)?.map(|r| match r {
        ItemRef::Id(id) | ItemRef::Embedded { id } => id,
    }))
}

/// Mutable view of one gear collection and its equipped slot.
pub struct GearSlot<'a, G> {
    pub items: &'a mut Vec<G>,
    pub equipped: &'a mut Option<String>,
}

/// Gear kinds that live in an `Inventory`.
pub trait Stowed: Gear {
    fn collection(inventory: &Inventory) -> &[Self];
    fn equipped_id(inventory: &Inventory) -> Option<&str>;
    fn slot(inventory: &mut Inventory) -> GearSlot<'_, Self>;
}

impl Stowed for Weapon {
    fn collection(inventory: &Inventory) -> &[Self] {
        &inventory.weapons
    }

    fn equipped_id(inventory: &Inventory) -> Option<&str> {
        inventory.current_weapon.as_deref()
    }

    fn slot(inventory: &mut Inventory) -> GearSlot<'_, Self> {
        GearSlot {
            items: &mut inventory.weapons,
            equipped: &mut inventory.current_weapon,
        }
    }
}

impl Stowed for Armor {
    fn collection(inventory: &Inventory) -> &[Self] {
        &inventory.armor
    }

    fn equipped_id(inventory: &Inventory) -> Option<&str> {
        inventory.current_armor.as_deref()
    }

    fn slot(inventory: &mut Inventory) -> GearSlot<'_, Self> {
        GearSlot {
            items: &mut inventory.armor,
            equipped: &mut inventory.current_armor,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find<G: Stowed>(&self, id: &str) -> Option<&G> {
        G::collection(self).iter().find(|item| item.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.weapons.iter().any(|w| w.id == id) || self.armor.iter().any(|a| a.id == id)
    }

    pub fn is_equipped(&self, id: &str) -> bool {
        self.current_weapon.as_deref() == Some(id) || self.current_armor.as_deref() == Some(id)
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.current_weapon
            .as_deref()
            .and_then(|id| self.find::<Weapon>(id))
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.current_armor
            .as_deref()
            .and_then(|id| self.find::<Armor>(id))
    }

    /// Clear equipped ids that point at items no longer owned.
    pub fn drop_dangling_refs(&mut self) {
        if self.current_weapon.is_some() && self.equipped_weapon().is_none() {
            self.current_weapon = None;
        }
        if self.current_armor.is_some() && self.equipped_armor().is_none() {
            self.current_armor = None;
        }
    }
}
