//! Structured turn output and the narrative message sink.
//!
//! Rules never print. Every resolver call writes into a [`TurnOutput`]: a list
//! of [`TurnEvent`]s for programmatic consumers plus buffered narrative
//! [`Message`]s. The engine forwards the messages to the caller's
//! [`MessageSink`] only after a turn commits, so a rejected action leaves the
//! sink untouched.

use crate::combat::AttackReport;
use crate::state::{ConditionKind, EntityId, ItemId, Position, SpecialAttackKind};
use crate::status::ApplyResult;

/// Semantic colour of a narrative line; renderers map it to a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTag {
    Text,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    StatusEffect,
    Warning,
    HealthRecovered,
    Descend,
    Impossible,
}

/// Fire-and-forget narrative output.
pub trait MessageSink {
    fn log_message(&mut self, text: &str, color: ColorTag);
}

/// One narrative line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: ColorTag,
}

/// In-memory sink that keeps every line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }
}

impl MessageSink for MessageLog {
    fn log_message(&mut self, text: &str, color: ColorTag) {
        self.messages.push(Message {
            text: text.to_owned(),
            color,
        });
    }
}

/// Structured record of something that happened during a turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// A damage-over-time condition dealt its tick.
    DamageTick {
        actor: EntityId,
        kind: ConditionKind,
        damage: u32,
    },
    /// A fatal-on-expiry condition advanced without killing.
    ConditionWarning {
        actor: EntityId,
        kind: ConditionKind,
        turns_elapsed: u32,
    },
    /// A fatal-on-expiry condition ran out and killed its host.
    ConditionExpiredFatal { actor: EntityId, kind: ConditionKind },
    /// An on-hit or spell condition was evaluated against a target.
    ConditionInflicted {
        source: EntityId,
        target: EntityId,
        kind: ConditionKind,
        result: ApplyResult,
    },
    ConditionCleared { actor: EntityId, kind: ConditionKind },
    /// The intended action was replaced by a condition override.
    ActionOverridden { actor: EntityId, cause: ConditionKind },
    Attack(AttackReport),
    Moved {
        actor: EntityId,
        from: Position,
        to: Position,
    },
    Waited { actor: EntityId },
    Died { actor: EntityId },
    ExperienceGained { actor: EntityId, amount: u32 },
    /// A grab or swallow link ended.
    Released { actor: EntityId, holder: EntityId },
    SpecialFired {
        attacker: EntityId,
        target: EntityId,
        kind: SpecialAttackKind,
        damage: u32,
    },
    SpecialResisted {
        attacker: EntityId,
        target: EntityId,
        kind: SpecialAttackKind,
    },
    IngestDamage {
        holder: EntityId,
        target: EntityId,
        damage: u32,
    },
    ItemDamaged { owner: EntityId, item: ItemId },
    ItemDestroyed { owner: EntityId, item: ItemId },
    ItemStolen {
        from: EntityId,
        by: EntityId,
        item: ItemId,
    },
    ItemPickedUp { actor: EntityId, item: ItemId },
    ItemDropped { actor: EntityId, item: ItemId },
    ItemEquipped { actor: EntityId, item: ItemId },
    ItemUnequipped { actor: EntityId, item: ItemId },
    ItemConsumed { actor: EntityId, item: ItemId },
    ChestLooted { actor: EntityId, item: ItemId },
    Healed { actor: EntityId, amount: u32 },
    ManaRestored { actor: EntityId, amount: u32 },
    SpellDamage {
        caster: EntityId,
        target: EntityId,
        damage: u32,
    },
    Descended { depth: u32 },
}

/// Buffered output of one turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnOutput {
    pub events: Vec<TurnEvent>,
    pub messages: Vec<Message>,
}

impl TurnOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    pub fn say(&mut self, text: impl Into<String>, color: ColorTag) {
        self.messages.push(Message {
            text: text.into(),
            color,
        });
    }

    /// Forwards buffered messages to `sink`, returning the events.
    pub fn flush_into(self, sink: &mut dyn MessageSink) -> Vec<TurnEvent> {
        for message in &self.messages {
            sink.log_message(&message.text, message.color);
        }
        self.events
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }
}

/// Colour for an attack line depending on who swings.
pub fn attack_color(attacker: EntityId) -> ColorTag {
    if attacker.is_player() {
        ColorTag::PlayerAttack
    } else {
        ColorTag::EnemyAttack
    }
}
