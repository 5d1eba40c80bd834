//! Status effect engine.
//!
//! Two entry points:
//! - [`apply_on_hit_conditions`]: after a landed blow, evaluate every condition
//!   the attacker inflicts against the defender
//! - [`tick_passive_conditions`]: at the start of an actor's turn, advance and
//!   resolve damage-over-time and fatal-on-expiry conditions
//!
//! Conditions that override the action itself (stun, confusion, fear, charm,
//! blindness, rage, grab) are advanced by the turn resolver instead.

mod apply;
mod tick;

pub use apply::{ApplyResult, ConditionOutcome, apply_condition, apply_on_hit_conditions, cure};
pub use tick::{TickReport, tick_passive_conditions};
