use crate::state::GameState;

/// Builds the next floor when an actor takes the stairs.
///
/// The engine calls this after `depth` has been incremented; implementations
/// replace the world layout and reposition actors as they see fit.
pub trait FloorLifecycle {
    fn regenerate_floor(&mut self, state: &mut GameState, depth: u32);
}
