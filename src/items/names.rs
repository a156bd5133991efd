//! Fixed name pools for generated items and enemies.

use super::types::Rarity;

pub fn weapon_names(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Rusty Sword", "Wooden Club", "Stone Axe", "Iron Dagger"],
        Rarity::Rare => &["Steel Blade", "Silver Mace", "Enchanted Bow", "Crystal Staff"],
        Rarity::Epic => &["Flamebrand", "Frostbite", "Thunder Strike", "Shadow Cleaver"],
        Rarity::Legendary => &["Excalibur", "Mjolnir", "Gungnir", "Durandal"],
        Rarity::Mythical => &["Starforged Edge", "Worldsplitter", "Dawnbreaker", "Oblivion"],
    }
}

pub fn armor_names(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Leather Vest", "Cloth Robe", "Wooden Shield", "Iron Helm"],
        Rarity::Rare => &["Chainmail", "Steel Plate", "Mystic Cloak", "Silver Guard"],
        Rarity::Epic => &["Dragon Scale", "Phoenix Mail", "Void Armor", "Crystal Guard"],
        Rarity::Legendary => &["Divine Aegis", "Eternal Plate", "Shadowweave", "Celestial Ward"],
        Rarity::Mythical => &["Astral Bulwark", "Aegis of Ages", "Voidheart Mail", "Sunforged Plate"],
    }
}

pub const ENEMY_NAMES: [&str; 12] = [
    "Goblin Warrior",
    "Shadow Wolf",
    "Stone Golem",
    "Fire Imp",
    "Ice Troll",
    "Dark Mage",
    "Lightning Drake",
    "Void Wraith",
    "Crystal Beast",
    "Ancient Dragon",
    "Chaos Lord",
    "Nightmare King",
];

/// Enemy name for a zone. Zones past the end of the table reuse the last name.
pub fn enemy_name(zone: u32) -> &'static str {
    let index = (zone.saturating_sub(1) as usize).min(ENEMY_NAMES.len() - 1);
    ENEMY_NAMES[index]
}
