//! Condition registry for actors.
//!
//! Every actor owns one [`ConditionRegistry`]: a fixed array indexed by the
//! closed [`ConditionKind`] enum. Each slot tracks whether the owner is
//! afflicted, immune, able to inflict the condition on hit, and how many turns
//! have elapsed since the condition was last applied or resolved.
//!
//! Durations and damage-over-time amounts are static per kind; they are never
//! stored per instance.

/// Closed set of status conditions.
///
/// The declaration order is the evaluation order used when applying on-hit
/// conditions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
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
pub enum ConditionKind {
    Bleed,
    Poison,
    Stun,
    Confusion,
    Grab,
    Condemnation,
    Petrification,
    Fear,
    Charm,
    Blindness,
    Rage,
}

impl ConditionKind {
    pub const COUNT: usize = 11;

    /// All kinds in evaluation order.
    pub const ALL: [ConditionKind; Self::COUNT] = [
        Self::Bleed,
        Self::Poison,
        Self::Stun,
        Self::Confusion,
        Self::Grab,
        Self::Condemnation,
        Self::Petrification,
        Self::Fear,
        Self::Charm,
        Self::Blindness,
        Self::Rage,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of elapsed turns after which the condition resolves.
    ///
    /// A condition is expired once `turns_elapsed > threshold()`.
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Bleed => 4,
            Self::Poison => 4,
            Self::Stun => 1,
            Self::Confusion => 4,
            Self::Grab => 3,
            Self::Condemnation => 10,
            Self::Petrification => 6,
            Self::Fear => 5,
            Self::Charm => 5,
            Self::Blindness => 5,
            Self::Rage => 4,
        }
    }

    /// Fixed damage per tick for damage-over-time conditions.
    pub const fn tick_damage(self) -> Option<u32> {
        match self {
            Self::Bleed => Some(1),
            Self::Poison => Some(2),
            _ => None,
        }
    }

    /// Conditions that kill their host when the counter runs out.
    pub const fn is_fatal_on_expiry(self) -> bool {
        matches!(self, Self::Condemnation | Self::Petrification)
    }

    /// Conditions cured by healing potions and the cure spell.
    pub const fn is_curable(self) -> bool {
        matches!(
            self,
            Self::Bleed | Self::Poison | Self::Condemnation | Self::Petrification | Self::Blindness
        )
    }
}

/// Per-kind state held by the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionState {
    /// The owner currently suffers from this condition.
    pub afflicted: bool,
    /// The owner can never be afflicted by this condition.
    pub immune: bool,
    /// The owner applies this condition to targets it hits.
    pub inflicts: bool,
    /// Turns since the condition was last applied or resolved.
    pub turns_elapsed: u32,
}

/// Enum-indexed condition table owned by an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionRegistry {
    states: [ConditionState; ConditionKind::COUNT],
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: marks the owner immune to `kind`.
    #[must_use]
    pub fn with_immunity(mut self, kind: ConditionKind) -> Self {
        self.states[kind.index()].immune = true;
        self
    }

    /// Builder: the owner inflicts `kind` on hit.
    #[must_use]
    pub fn with_inflicts(mut self, kind: ConditionKind) -> Self {
        self.states[kind.index()].inflicts = true;
        self
    }

    /// Builder: the owner starts afflicted by `kind`.
    #[must_use]
    pub fn with_affliction(mut self, kind: ConditionKind) -> Self {
        self.afflict(kind);
        self
    }

    pub fn get(&self, kind: ConditionKind) -> &ConditionState {
        &self.states[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ConditionKind) -> &mut ConditionState {
        &mut self.states[kind.index()]
    }

    pub fn is_afflicted(&self, kind: ConditionKind) -> bool {
        self.get(kind).afflicted
    }

    pub fn is_immune(&self, kind: ConditionKind) -> bool {
        self.get(kind).immune
    }

    pub fn inflicts(&self, kind: ConditionKind) -> bool {
        self.get(kind).inflicts
    }

    pub fn turns_elapsed(&self, kind: ConditionKind) -> u32 {
        self.get(kind).turns_elapsed
    }

    /// True when the condition is active and its counter has passed the threshold.
    pub fn is_expired(&self, kind: ConditionKind) -> bool {
        let state = self.get(kind);
        state.afflicted && state.turns_elapsed > kind.threshold()
    }

    /// Sets the affliction and restarts its counter.
    pub fn afflict(&mut self, kind: ConditionKind) {
        let state = self.get_mut(kind);
        state.afflicted = true;
        state.turns_elapsed = 0;
    }

    /// Clears the affliction and restarts its counter.
    pub fn clear(&mut self, kind: ConditionKind) {
        let state = self.get_mut(kind);
        state.afflicted = false;
        state.turns_elapsed = 0;
    }

    /// Advances the counter by one turn.
    pub fn advance(&mut self, kind: ConditionKind) {
        let state = self.get_mut(kind);
        state.turns_elapsed = state.turns_elapsed.saturating_add(1);
    }

    /// Restarts the counter without touching the affliction flag.
    pub fn reset_counter(&mut self, kind: ConditionKind) {
        self.get_mut(kind).turns_elapsed = 0;
    }

    pub fn set_immune(&mut self, kind: ConditionKind, immune: bool) {
        self.get_mut(kind).immune = immune;
    }

    pub fn set_inflicts(&mut self, kind: ConditionKind, inflicts: bool) {
        self.get_mut(kind).inflicts = inflicts;
    }

    /// Kinds the owner can inflict on hit, in evaluation order.
    pub fn innate_inflicts(&self) -> impl Iterator<Item = ConditionKind> + '_ {
        ConditionKind::ALL
            .into_iter()
            .filter(|kind| self.inflicts(*kind))
    }

    /// Kinds currently afflicting the owner, in evaluation order.
    pub fn afflictions(&self) -> impl Iterator<Item = ConditionKind> + '_ {
        ConditionKind::ALL
            .into_iter()
            .filter(|kind| self.is_afflicted(*kind))
    }

    /// Drops every active affliction. Immunities and inflict flags persist.
    pub fn clear_all(&mut self) {
        for kind in ConditionKind::ALL {
            self.clear(kind);
        }
    }
}
