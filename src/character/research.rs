use crate::core::constants::RESEARCH_LEVELS_PER_TIER;

pub fn research_tier(level: u32) -> u32 {
    level / RESEARCH_LEVELS_PER_TIER
}

/// Percentage bonus granted by research at `level`.
///
/// Every level in tier `t` is worth `t + 1` percent, so the curve steepens
/// each time a tier is completed: 10 levels give 10%, 20 give 30%, 30 give 60%.
pub fn research_bonus_percent(level: u32) -> u64 {
    let tier = research_tier(level) as u64;
    let into_tier = (level % RESEARCH_LEVELS_PER_TIER) as u64;
    let per_tier = RESEARCH_LEVELS_PER_TIER as u64;
    per_tier * tier * (tier + 1) / 2 + into_tier * (tier + 1)
}

/// Scale `value` by `bonus_percent`, flooring the result.
pub fn apply_bonus(value: u32, bonus_percent: u64) -> u32 {
    let scaled = (value as u64).saturating_mul(100 + bonus_percent) / 100;
    scaled.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_tier() {
        assert_eq!(research_tier(0), 0);
        assert_eq!(research_tier(9), 0);
        assert_eq!(research_tier(10), 1);
        assert_eq!(research_tier(25), 2);
    }

    #[test]
    fn test_bonus_curve_values() {
        assert_eq!(research_bonus_percent(0), 0);
        assert_eq!(research_bonus_percent(1), 1);
        assert_eq!(research_bonus_percent(9), 9);
        assert_eq!(research_bonus_percent(10), 10);
        assert_eq!(research_bonus_percent(11), 12);
        assert_eq!(research_bonus_percent(15), 20);
        assert_eq!(research_bonus_percent(20), 30);
        assert_eq!(research_bonus_percent(30), 60);
    }

    #[test]
    fn test_bonus_curve_strictly_increasing() {
        let mut previous = research_bonus_percent(0);
        for level in 1..200 {
            let bonus = research_bonus_percent(level);
            assert!(bonus > previous, "level {level}: {bonus} <= {previous}");
            previous = bonus;
        }
    }

    #[test]
    fn test_apply_bonus_floors() {
        assert_eq!(apply_bonus(50, 0), 50);
        assert_eq!(apply_bonus(50, 10), 55);
        assert_eq!(apply_bonus(33, 10), 36);
        assert_eq!(apply_bonus(0, 60), 0);
    }

    #[test]
    fn test_extreme_research_level_saturates() {
        let bonus = research_bonus_percent(u32::MAX);
        assert!(bonus > 0);
        assert_eq!(apply_bonus(u32::MAX, bonus), u32::MAX);
        assert_eq!(apply_bonus(200, bonus), u32::MAX);
    }
}
