/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// A fear- or blindness-impaired attacker hits only when a d100 roll
    /// exceeds this value.
    pub impaired_hit_threshold: u32,
    /// When false, blindness only randomizes the movement of non-player actors.
    pub blindness_affects_player: bool,
    /// Maximum Chebyshev distance for ranged AI attacks (axis-aligned only).
    pub ranged_ai_range: u32,
    /// Radius within which a charmed NPC looks for another monster to attack.
    pub charm_search_radius: u32,
    /// Extra path cost for tiles occupied by a blocking actor.
    pub path_blocker_cost: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 26;
    pub const MAX_SPELLS: usize = 16;

    /// Flat bonus added to raw melee damage while enraged.
    pub const RAGE_POWER_BONUS: u32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_IMPAIRED_HIT_THRESHOLD: u32 = 70;
    pub const DEFAULT_RANGED_AI_RANGE: u32 = 3;
    pub const DEFAULT_CHARM_SEARCH_RADIUS: u32 = 8;
    pub const DEFAULT_PATH_BLOCKER_COST: u32 = 10;

    pub fn new() -> Self {
        Self {
            impaired_hit_threshold: Self::DEFAULT_IMPAIRED_HIT_THRESHOLD,
            blindness_affects_player: false,
            ranged_ai_range: Self::DEFAULT_RANGED_AI_RANGE,
            charm_search_radius: Self::DEFAULT_CHARM_SEARCH_RADIUS,
            path_blocker_cost: Self::DEFAULT_PATH_BLOCKER_COST,
        }
    }

    #[must_use]
    pub fn with_blindness_affects_player(mut self, enabled: bool) -> Self {
        self.blindness_affects_player = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
