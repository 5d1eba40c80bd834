//! Combat resolution.
//!
//! - `raw_damage` / `final_damage`: pure damage arithmetic
//! - `check_hit`: the impaired-attacker miss roll
//! - `resolve_attack`: full resolution against game state (hit check, damage,
//!   death handling, on-hit conditions)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{DamageMultiplier, final_damage, raw_damage};
pub use hit::{HitCheck, Impairment, check_hit};
pub use result::{
    AttackOutcome, AttackReport, AttackStyle, compute_attack, miss_into_void, resolve_attack,
};
