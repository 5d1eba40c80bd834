//! Damage calculation.

pub use crate::state::DamageMultiplier;

/// Raw damage before affinities: attack power minus defense. May be negative.
///
/// # Formula
///
/// ```text
/// raw = power + bonus - defense
/// ```
///
/// `bonus` is the flat rage bonus for enraged melee attackers, else 0.
pub fn raw_damage(power: u32, bonus: u32, defense: u32) -> i64 {
    i64::from(power) + i64::from(bonus) - i64::from(defense)
}

/// Damage actually dealt: `raw * multiplier` when the blow lands with
/// positive raw damage and a non-zero multiplier, otherwise 0.
pub fn final_damage(raw: i64, multiplier: DamageMultiplier, hit: bool) -> u32 {
    if !hit || raw <= 0 || multiplier.is_zero() {
        return 0;
    }
    let raw = u32::try_from(raw).unwrap_or(u32::MAX);
    multiplier.apply(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_raw_deals_nothing() {
        assert_eq!(raw_damage(2, 0, 5), -3);
        assert_eq!(final_damage(-3, DamageMultiplier::Critical, true), 0);
    }

    #[test]
    fn miss_deals_nothing() {
        assert_eq!(final_damage(8, DamageMultiplier::Normal, false), 0);
    }

    #[test]
    fn multiplier_scales_raw() {
        assert_eq!(final_damage(8, DamageMultiplier::Normal, true), 8);
        assert_eq!(final_damage(8, DamageMultiplier::Critical, true), 16);
        assert_eq!(final_damage(8, DamageMultiplier::Resisted, true), 4);
        assert_eq!(final_damage(8, DamageMultiplier::Immune, true), 0);
    }
}
