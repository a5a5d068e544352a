//! Errors raised while building actions from untyped input

use thiserror::Error;

use crate::actions::{ActionType, PayloadKind};

/// Failure to construct an [`Action`](crate::actions::Action)
///
/// Only raised at construction time. Dispatching never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action type `{0}`")]
    UnknownActionType(String),

    #[error("{kind} expects a {expected} payload")]
    MissingPayload {
        kind: ActionType,
        expected: PayloadKind,
    },

    #[error("{kind} does not take a payload")]
    UnexpectedPayload { kind: ActionType },
}
