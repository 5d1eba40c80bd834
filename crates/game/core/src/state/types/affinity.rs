//! Elemental damage affinities.

/// Elements an attack can carry.
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
pub enum ElementKind {
    Fire,
    Ice,
    Electric,
}

impl ElementKind {
    pub const COUNT: usize = 3;
    pub const ALL: [ElementKind; Self::COUNT] = [Self::Fire, Self::Ice, Self::Electric];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Damage scaling produced by an affinity lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageMultiplier {
    /// x0
    Immune,
    /// x0.5
    Resisted,
    /// x1
    Normal,
    /// x2
    Critical,
}

impl DamageMultiplier {
    /// Scales a non-negative raw damage value.
    ///
    /// Halving rounds up so a resisted hit of 1 still lands.
    pub const fn apply(self, raw: u32) -> u32 {
        match self {
            Self::Immune => 0,
            Self::Resisted => raw.div_ceil(2),
            Self::Normal => raw,
            Self::Critical => raw.saturating_mul(2),
        }
    }

    /// Numeric factor, for reporting.
    pub const fn factor(self) -> f32 {
        match self {
            Self::Immune => 0.0,
            Self::Resisted => 0.5,
            Self::Normal => 1.0,
            Self::Critical => 2.0,
        }
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Immune)
    }
}

/// Flags for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAffinity {
    pub resistant: bool,
    pub immune: bool,
    pub vulnerable: bool,
    pub attacks_with: bool,
}

/// Per-actor elemental configuration.
///
/// At most one element may carry `attacks_with`; content loaders reject
/// templates that set more.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityProfile {
    elements: [ElementAffinity; ElementKind::COUNT],
}

impl AffinityProfile {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn resistant_to(mut self, element: ElementKind) -> Self {
        self.elements[element.index()].resistant = true;
        self
    }

    #[must_use]
    pub fn immune_to(mut self, element: ElementKind) -> Self {
        self.elements[element.index()].immune = true;
        self
    }

    #[must_use]
    pub fn vulnerable_to(mut self, element: ElementKind) -> Self {
        self.elements[element.index()].vulnerable = true;
        self
    }

    #[must_use]
    pub fn attacking_with(mut self, element: ElementKind) -> Self {
        self.elements[element.index()].attacks_with = true;
        self
    }

    pub fn get(&self, element: ElementKind) -> &ElementAffinity {
        &self.elements[element.index()]
    }

    pub fn get_mut(&mut self, element: ElementKind) -> &mut ElementAffinity {
        &mut self.elements[element.index()]
    }

    /// The element this profile attacks with; first flagged element wins.
    pub fn attack_element(&self) -> Option<ElementKind> {
        ElementKind::ALL
            .into_iter()
            .find(|element| self.get(*element).attacks_with)
    }

    /// Number of elements flagged `attacks_with`. Valid profiles return 0 or 1.
    pub fn attack_element_count(&self) -> usize {
        self.elements.iter().filter(|e| e.attacks_with).count()
    }

    /// Multiplier applied to damage of `element` dealt to the owner.
    ///
    /// Resolution order: immune, resistant, vulnerable, neutral.
    pub fn multiplier(&self, element: Option<ElementKind>) -> DamageMultiplier {
        let Some(element) = element else {
            return DamageMultiplier::Normal;
        };
        let flags = self.get(element);
        if flags.immune {
            DamageMultiplier::Immune
        } else if flags.resistant {
            DamageMultiplier::Resisted
        } else if flags.vulnerable {
            DamageMultiplier::Critical
        } else {
            DamageMultiplier::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table() {
        let profile = AffinityProfile::new()
            .immune_to(ElementKind::Fire)
            .resistant_to(ElementKind::Ice)
            .vulnerable_to(ElementKind::Electric);

        assert_eq!(profile.multiplier(Some(ElementKind::Fire)), DamageMultiplier::Immune);
        assert_eq!(profile.multiplier(Some(ElementKind::Ice)), DamageMultiplier::Resisted);
        assert_eq!(
            profile.multiplier(Some(ElementKind::Electric)),
            DamageMultiplier::Critical
        );
        assert_eq!(AffinityProfile::new().multiplier(Some(ElementKind::Fire)), DamageMultiplier::Normal);
        assert_eq!(profile.multiplier(None), DamageMultiplier::Normal);
    }

    #[test]
    fn immune_beats_resistant_beats_vulnerable() {
        let all = AffinityProfile::new()
            .immune_to(ElementKind::Ice)
            .resistant_to(ElementKind::Ice)
            .vulnerable_to(ElementKind::Ice);
        assert_eq!(all.multiplier(Some(ElementKind::Ice)), DamageMultiplier::Immune);

        let two = AffinityProfile::new()
            .resistant_to(ElementKind::Ice)
            .vulnerable_to(ElementKind::Ice);
        assert_eq!(two.multiplier(Some(ElementKind::Ice)), DamageMultiplier::Resisted);
    }

    #[test]
    fn attack_element_is_first_flagged() {
        let profile = AffinityProfile::new().attacking_with(ElementKind::Electric);
        assert_eq!(profile.attack_element(), Some(ElementKind::Electric));
        assert_eq!(AffinityProfile::new().attack_element(), None);

        let invalid = profile.attacking_with(ElementKind::Ice);
        assert_eq!(invalid.attack_element(), Some(ElementKind::Ice));
        assert_eq!(invalid.attack_element_count(), 2);
    }

    #[test]
    fn resisted_damage_rounds_up() {
        assert_eq!(DamageMultiplier::Resisted.apply(1), 1);
        assert_eq!(DamageMultiplier::Resisted.apply(7), 4);
        assert_eq!(DamageMultiplier::Resisted.apply(8), 4);
        assert_eq!(DamageMultiplier::Critical.apply(8), 16);
        assert_eq!(DamageMultiplier::Immune.apply(8), 0);
    }
}
