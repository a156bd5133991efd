// Starting profile
pub const STARTING_COINS: u64 = 100;
pub const STARTING_GEMS: u64 = 0;
pub const STARTING_ZONE: u32 = 1;
pub const BASE_HP: u32 = 200;
pub const BASE_ATK: u32 = 50;
pub const BASE_DEF: u32 = 0;

// Persistence
pub const STORAGE_KEY: &str = "hugoland_game_state";
pub const SAVE_DIR_NAME: &str = ".hugoland";

// Premium unlock (one-way)
pub const PREMIUM_ZONE: u32 = 50;

// Enemy scaling: hp = BASE + zone * STEP, atk = zone * ATK_PER_ZONE
pub const ENEMY_BASE_HP: u32 = 150;
pub const ENEMY_HP_PER_ZONE: u32 = 2;
pub const ENEMY_ATK_PER_ZONE: u32 = 5;
pub const ENEMY_DEF: u32 = 0;

// Combat floor so defense can never stall a fight
pub const MIN_DAMAGE: u32 = 1;

// Victory rewards: coins = zone * COINS_PER_ZONE + 0..=COIN_JITTER, gems = GEMS_MIN..=GEMS_MAX
pub const VICTORY_COINS_PER_ZONE: u64 = 8;
pub const VICTORY_COIN_JITTER: u64 = 15;
pub const VICTORY_GEMS_MIN: u64 = 1;
pub const VICTORY_GEMS_MAX: u64 = 3;

// Timed answer window before a miss is auto-submitted
pub const ANSWER_WINDOW_SECONDS: f64 = 15.0;

// Rarity weights, walked cumulatively in listed order.
// Index: Common, Rare, Epic, Legendary, Mythical
pub const STANDARD_RARITY_WEIGHTS: [f64; 5] = [50.0, 30.0, 15.0, 5.0, 0.0];
pub const ELITE_RARITY_WEIGHTS: [f64; 5] = [35.0, 30.0, 20.0, 10.0, 5.0];

// Per-rarity item tables, same index order as the weights
pub const WEAPON_BASE_ATK: [u32; 5] = [15, 25, 40, 60, 90];
pub const WEAPON_ATK_JITTER: u32 = 10;
pub const ARMOR_BASE_DEF: [u32; 5] = [8, 15, 25, 40, 60];
pub const ARMOR_DEF_JITTER: u32 = 5;
pub const ITEM_UPGRADE_COST: [u64; 5] = [5, 10, 20, 40, 80];
pub const WEAPON_SELL_PRICE: [u64; 5] = [10, 25, 60, 150, 400];
pub const ARMOR_SELL_PRICE: [u64; 5] = [8, 20, 50, 120, 320];

// Effective power per level above 1
pub const WEAPON_ATK_PER_LEVEL: u32 = 10;
pub const ARMOR_DEF_PER_LEVEL: u32 = 5;

// Upgrade scaling as integer ratios (x1.5 and x1.2, floored)
pub const UPGRADE_COST_MULT: (u64, u64) = (3, 2);
pub const SELL_PRICE_MULT: (u64, u64) = (6, 5);

// Item ids: lowercase base-36 tokens
pub const ITEM_ID_LENGTH: usize = 9;

// Chests: (cost in coins, flat gem bonus)
pub const BASIC_CHEST: (u64, u64) = (50, 1);
pub const RARE_CHEST: (u64, u64) = (150, 2);
pub const EPIC_CHEST: (u64, u64) = (400, 4);
pub const LEGENDARY_CHEST: (u64, u64) = (1000, 8);
pub const CHEST_MIN_ITEMS: usize = 2;
pub const CHEST_MAX_ITEMS: usize = 3;
pub const CHEST_WEAPON_CHANCE: f64 = 0.5;

// Research
pub const RESEARCH_COST: u64 = 150;
pub const RESEARCH_LEVELS_PER_TIER: u32 = 10;
