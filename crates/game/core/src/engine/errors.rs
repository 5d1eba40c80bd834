//! Error returned by the engine for a rejected turn.

use crate::action::{ActionError, Impossible};
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::event::{ColorTag, MessageSink};

/// A turn that did not happen. The state is exactly as before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind}")]
pub struct TurnError {
    #[source]
    pub kind: ActionError,
    pub context: ErrorContext,
}

impl TurnError {
    pub fn new(kind: ActionError, context: ErrorContext) -> Self {
        Self { kind, context }
    }

    /// The player-facing rejection, when that is what this is.
    pub fn impossible(&self) -> Option<Impossible> {
        match self.kind {
            ActionError::Impossible(reason) => Some(reason),
            _ => None,
        }
    }

    /// Shows a player-facing rejection on `sink`. Other errors are not
    /// narrative and are left to the caller.
    pub fn report(&self, sink: &mut dyn MessageSink) {
        if let Some(reason) = self.impossible() {
            sink.log_message(&reason.to_string(), ColorTag::Impossible);
        }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        self.kind.severity()
    }

    fn context(&self) -> Option<&ErrorContext> {
        Some(&self.context)
    }

    fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}
