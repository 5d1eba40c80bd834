//! Recharge-gated special abilities.

/// Special ability kinds, in firing priority order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpecialAttackKind {
    Percentile,
    StatsDrain,
    Rot,
    Corrosion,
    Ingest,
    Dispel,
    Steal,
}

impl SpecialAttackKind {
    pub const COUNT: usize = 7;

    pub const ALL: [SpecialAttackKind; Self::COUNT] = [
        Self::Percentile,
        Self::StatsDrain,
        Self::Rot,
        Self::Corrosion,
        Self::Ingest,
        Self::Dispel,
        Self::Steal,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Recharge threshold; the ability is ready once `recharge >= threshold - 1`.
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Percentile => 4,
            Self::StatsDrain => 3,
            Self::Rot => 3,
            Self::Corrosion => 3,
            Self::Ingest => 5,
            Self::Dispel => 4,
            Self::Steal => 3,
        }
    }
}

/// One ability slot.
///
/// `amount` is the ability-specific parameter (percentile %, drain amount) and
/// `damage` its flat damage (ingest uses it as per-turn digestion damage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAbility {
    pub enabled: bool,
    /// The owner resists this ability when others use it on them.
    pub immune_to: bool,
    pub recharge: u32,
    pub amount: u32,
    pub damage: u32,
}

/// Enum-indexed table of special abilities owned by an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAttackProfile {
    abilities: [SpecialAbility; SpecialAttackKind::COUNT],
}

impl SpecialAttackProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: enables `kind` with its parameters.
    #[must_use]
    pub fn with_ability(mut self, kind: SpecialAttackKind, amount: u32, damage: u32) -> Self {
        let ability = &mut self.abilities[kind.index()];
        ability.enabled = true;
        ability.amount = amount;
        ability.damage = damage;
        self
    }

    /// Builder: the owner resists `kind`.
    #[must_use]
    pub fn with_immunity(mut self, kind: SpecialAttackKind) -> Self {
        self.abilities[kind.index()].immune_to = true;
        self
    }

    pub fn get(&self, kind: SpecialAttackKind) -> &SpecialAbility {
        &self.abilities[kind.index()]
    }

    pub fn get_mut(&mut self, kind: SpecialAttackKind) -> &mut SpecialAbility {
        &mut self.abilities[kind.index()]
    }

    pub fn is_ready(&self, kind: SpecialAttackKind) -> bool {
        let ability = self.get(kind);
        ability.enabled && ability.recharge.saturating_add(1) >= kind.threshold()
    }

    pub fn is_immune_to(&self, kind: SpecialAttackKind) -> bool {
        self.get(kind).immune_to
    }

    pub fn has_any_enabled(&self) -> bool {
        self.abilities.iter().any(|a| a.enabled)
    }

    /// First ready ability in priority order.
    pub fn first_ready(&self) -> Option<SpecialAttackKind> {
        SpecialAttackKind::ALL
            .into_iter()
            .find(|kind| self.is_ready(*kind))
    }

    pub fn reset(&mut self, kind: SpecialAttackKind) {
        self.get_mut(kind).recharge = 0;
    }

    /// Advances the recharge counter of every enabled ability except `fired`.
    pub fn recharge_all_except(&mut self, fired: Option<SpecialAttackKind>) {
        for kind in SpecialAttackKind::ALL {
            if Some(kind) == fired {
                continue;
            }
            let ability = self.get_mut(kind);
            if ability.enabled {
                ability.recharge = ability.recharge.saturating_add(1);
            }
        }
    }
}
