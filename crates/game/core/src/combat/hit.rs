//! Hit checks for impaired attackers.

use crate::env::Dice;
use crate::state::{ActorState, ConditionKind};

/// Condition that makes an attacker miss sometimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impairment {
    Fear,
    Blindness,
}

impl Impairment {
    /// Fear takes precedence over blindness when both are active.
    pub fn of(attacker: &ActorState) -> Option<Self> {
        if attacker.is_afflicted(ConditionKind::Fear) {
            Some(Self::Fear)
        } else if attacker.is_afflicted(ConditionKind::Blindness) {
            Some(Self::Blindness)
        } else {
            None
        }
    }
}

/// Result of the hit check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitCheck {
    pub hit: bool,
    /// The d100 roll, when one was needed.
    pub roll: Option<u32>,
    pub impairment: Option<Impairment>,
}

impl HitCheck {
    pub const CERTAIN: Self = Self {
        hit: true,
        roll: None,
        impairment: None,
    };
}

/// Unimpaired attackers always hit. Impaired ones roll 1-100 and hit iff the
/// roll exceeds `threshold`.
pub fn check_hit(attacker: &ActorState, dice: &mut Dice<'_>, threshold: u32) -> HitCheck {
    let Some(impairment) = Impairment::of(attacker) else {
        return HitCheck::CERTAIN;
    };
    let roll = dice.d100();
    HitCheck {
        hit: roll > threshold,
        roll: Some(roll),
        impairment: Some(impairment),
    }
}
