//! Per-turn execution context.

use crate::config::GameConfig;
use crate::env::{Dice, Env, ItemOracle, MapOracle, OracleError};
use crate::event::TurnOutput;
use crate::state::{EntityId, GameState};

/// Everything a rule needs while one actor's turn resolves.
///
/// Oracles that every turn consults are resolved once up front; the rest stay
/// reachable through `env`.
pub struct TurnContext<'a> {
    /// The acting entity.
    pub actor: EntityId,

    /// Mutable game state.
    pub state: &'a mut GameState,

    /// Environment oracles.
    pub env: Env<'a>,
    pub map: &'a dyn MapOracle,
    pub items: &'a dyn ItemOracle,
    pub config: &'a GameConfig,

    /// Rolls for this turn, seeded from the game seed, nonce and actor.
    pub dice: Dice<'a>,

    /// Events and narrative produced so far.
    pub out: TurnOutput,
}

impl<'a> TurnContext<'a> {
    /// Creates a context for `actor`, failing when a required oracle is missing.
    pub fn new(
        state: &'a mut GameState,
        env: Env<'a>,
        actor: EntityId,
    ) -> Result<Self, OracleError> {
        let map = env.map()?;
        let items = env.items()?;
        let config = env.config()?;
        let dice = Dice::new(env.rng()?, state.turn.seed, state.turn.nonce, actor);
        Ok(Self {
            actor,
            state,
            env,
            map,
            items,
            config,
            dice,
            out: TurnOutput::new(),
        })
    }
}
