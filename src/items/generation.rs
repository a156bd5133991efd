use super::names::{armor_names, weapon_names};
use super::types::{base_upgrade_cost, Armor, Gear, Loot, Rarity, Weapon};
use crate::core::constants::{
    ARMOR_BASE_DEF, ARMOR_DEF_JITTER, CHEST_WEAPON_CHANCE, ELITE_RARITY_WEIGHTS, ITEM_ID_LENGTH,
    STANDARD_RARITY_WEIGHTS, WEAPON_ATK_JITTER, WEAPON_BASE_ATK,
};
use rand::Rng;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Weight table for a chest. The elite table is the only one that admits Mythical.
pub fn rarity_weights(elite: bool) -> &'static [f64; 5] {
    if elite {
        &ELITE_RARITY_WEIGHTS
    } else {
        &STANDARD_RARITY_WEIGHTS
    }
}

/// Map a draw in [0, 100) onto a weight table.
///
/// Walks the table in `Rarity::ALL` order and picks the first rarity whose
/// cumulative weight meets or exceeds the draw, so a draw landing exactly on
/// a boundary belongs to the earlier rarity.
pub fn rarity_for_draw(draw: f64, weights: &[f64; 5]) -> Rarity {
    let mut cumulative = 0.0;
    let mut last = Rarity::Common;
    for (rarity, weight) in Rarity::ALL.iter().zip(weights.iter()) {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last = *rarity;
        if draw <= cumulative {
            return *rarity;
        }
    }
    last
}

pub fn roll_rarity(elite: bool, rng: &mut impl Rng) -> Rarity {
    let draw = rng.gen_range(0.0..100.0);
    rarity_for_draw(draw, rarity_weights(elite))
}

/// Random lowercase base-36 token.
pub fn generate_item_id(rng: &mut impl Rng) -> String {
    (0..ITEM_ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

fn pick_name(names: &[&str], rng: &mut impl Rng) -> String {
    names[rng.gen_range(0..names.len())].to_string()
}

pub fn generate_weapon(elite: bool, rng: &mut impl Rng) -> Weapon {
    let rarity = roll_rarity(elite, rng);
    let name = pick_name(weapon_names(rarity), rng);
    let base_atk = WEAPON_BASE_ATK[rarity.index()] + rng.gen_range(0..WEAPON_ATK_JITTER);

    Weapon {
        id: generate_item_id(rng),
        name,
        rarity,
        base_atk,
        level: 1,
        upgrade_cost: base_upgrade_cost(rarity),
        sell_price: Weapon::base_sell_price(rarity),
        chroma: elite && rarity == Rarity::Mythical,
    }
}

pub fn generate_armor(elite: bool, rng: &mut impl Rng) -> Armor {
    let rarity = roll_rarity(elite, rng);
    let name = pick_name(armor_names(rarity), rng);
    let base_def = ARMOR_BASE_DEF[rarity.index()] + rng.gen_range(0..ARMOR_DEF_JITTER);

    Armor {
        id: generate_item_id(rng),
        name,
        rarity,
        base_def,
        level: 1,
        upgrade_cost: base_upgrade_cost(rarity),
        sell_price: Armor::base_sell_price(rarity),
        chroma: elite && rarity == Rarity::Mythical,
    }
}

/// Roll weapon-or-armor independently, then generate that item.
pub fn generate_loot(elite: bool, rng: &mut impl Rng) -> Loot {
    if rng.gen_bool(CHEST_WEAPON_CHANCE) {
        Loot::Weapon(generate_weapon(elite, rng))
    } else {
        Loot::Armor(generate_armor(elite, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_rarity_for_draw_boundaries() {
        let table = rarity_weights(false);
        assert_eq!(rarity_for_draw(0.0, table), Rarity::Common);
        assert_eq!(rarity_for_draw(50.0, table), Rarity::Common);
        assert_eq!(rarity_for_draw(50.01, table), Rarity::Rare);
        assert_eq!(rarity_for_draw(80.0, table), Rarity::Rare);
        assert_eq!(rarity_for_draw(95.0, table), Rarity::Epic);
        assert_eq!(rarity_for_draw(99.99, table), Rarity::Legendary);
    }

    #[test]
    fn test_standard_table_never_mythical() {
        let table = rarity_weights(false);
        assert_eq!(rarity_for_draw(100.0, table), Rarity::Legendary);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..5000 {
            assert_ne!(roll_rarity(false, &mut rng), Rarity::Mythical);
        }
    }

    #[test]
    fn test_elite_table_boundaries() {
        let table = rarity_weights(true);
        assert_eq!(rarity_for_draw(35.0, table), Rarity::Common);
        assert_eq!(rarity_for_draw(65.0, table), Rarity::Rare);
        assert_eq!(rarity_for_draw(85.0, table), Rarity::Epic);
        assert_eq!(rarity_for_draw(95.0, table), Rarity::Legendary);
        assert_eq!(rarity_for_draw(95.5, table), Rarity::Mythical);
    }

    #[test]
    fn test_roll_rarity_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        for _ in 0..10_000 {
            counts[roll_rarity(false, &mut rng).index()] += 1;
        }
        assert!(counts[0] > 4500 && counts[0] < 5500, "common: {}", counts[0]);
        assert!(counts[1] > 2600 && counts[1] < 3400, "rare: {}", counts[1]);
        assert!(counts[2] > 1200 && counts[2] < 1800, "epic: {}", counts[2]);
        assert!(counts[3] > 300 && counts[3] < 700, "legendary: {}", counts[3]);
        assert_eq!(counts[4], 0);
    }

    #[test]
    fn test_elite_table_admits_mythical() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let found = (0..5000).any(|_| roll_rarity(true, &mut rng) == Rarity::Mythical);
        assert!(found, "Mythical should appear from the elite table");
    }

    #[test]
    fn test_item_id_format() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = generate_item_id(&mut rng);
        assert_eq!(id.len(), ITEM_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_item_ids_practically_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let ids: HashSet<String> = (0..10_000).map(|_| generate_item_id(&mut rng)).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generate_weapon_within_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let w = generate_weapon(false, &mut rng);
            let base = WEAPON_BASE_ATK[w.rarity.index()];
            assert!(w.base_atk >= base && w.base_atk < base + WEAPON_ATK_JITTER);
            assert_eq!(w.level, 1);
            assert_eq!(w.upgrade_cost, base_upgrade_cost(w.rarity));
            assert_eq!(w.sell_price, Weapon::base_sell_price(w.rarity));
            assert!(weapon_names(w.rarity).contains(&w.name.as_str()));
            assert!(!w.chroma);
        }
    }

    #[test]
    fn test_generate_armor_within_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..500 {
            let a = generate_armor(true, &mut rng);
            let base = ARMOR_BASE_DEF[a.rarity.index()];
            assert!(a.base_def >= base && a.base_def < base + ARMOR_DEF_JITTER);
            assert!(armor_names(a.rarity).contains(&a.name.as_str()));
            assert_eq!(a.chroma, a.rarity == Rarity::Mythical);
        }
    }

    #[test]
    fn test_generation_reproducible_with_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(2024);
        let mut b = ChaCha8Rng::seed_from_u64(2024);
        assert_eq!(generate_weapon(true, &mut a), generate_weapon(true, &mut b));
        assert_eq!(generate_loot(false, &mut a), generate_loot(false, &mut b));
    }

    #[test]
    fn test_generate_loot_produces_both_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let loot: Vec<Loot> = (0..200).map(|_| generate_loot(false, &mut rng)).collect();
        assert!(loot.iter().any(|l| matches!(l, Loot::Weapon(_))));
        assert!(loot.iter().any(|l| matches!(l, Loot::Armor(_))));
    }
}
