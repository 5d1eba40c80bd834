/// Turn bookkeeping shared by every actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Base seed set at game start; combined with `nonce` for every roll.
    pub seed: u64,

    /// Sequential turn identifier, incremented after every successful turn.
    ///
    /// A rejected player action leaves it untouched, so a retry replays the
    /// same rolls.
    pub nonce: u64,
}

impl TurnState {
    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }
}
