//! Deferred actions that hand their action to a caller-supplied dispatch.
//!
//! A thunk never performs I/O itself. `run` calls `dispatch` synchronously and
//! wraps its return value in an already-completed future, so async callers get
//! the same interface whether or not the underlying work was asynchronous.

use std::fmt;
use std::future::{ready, Ready};

use serde_json::Value;
use thiserror::Error;

use super::creator::{create_action, create_error_action, ActionCreator};
use super::types::Action;

/// Returned by an error thunk after its action has been dispatched.
///
/// `value` is whatever the dispatch function returned.
#[derive(Debug, Error)]
#[error("action '{kind}' rejected: {message}")]
pub struct ThunkRejected<R: fmt::Debug> {
    pub kind: String,
    pub message: String,
    pub value: R,
}

/// Builds [`Thunk`]s of one fixed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThunkCreator {
    creator: ActionCreator,
    rejects: bool,
}

impl ThunkCreator {
    pub fn kind(&self) -> &str {
        self.creator.kind()
    }

    pub fn create(&self, payload: Option<Value>, meta: Option<Value>) -> Thunk {
        Thunk {
            action: self.creator.create(payload, meta),
            rejects: self.rejects,
        }
    }

    pub fn create_empty(&self) -> Thunk {
        self.create(None, None)
    }
}

/// An action waiting for a dispatch function.
#[derive(Debug, Clone, PartialEq)]
pub struct Thunk {
    action: Action,
    rejects: bool,
}

impl Thunk {
    /// The action that will be handed to `dispatch`.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Dispatch the action and settle with the dispatch result.
    ///
    /// Error thunks still dispatch before settling with `Err`.
    pub fn run<D, R>(self, dispatch: D) -> Ready<Result<R, ThunkRejected<R>>>
    where
        D: FnOnce(Action) -> R,
        R: fmt::Debug,
    {
        let kind = self.action.kind.clone();
        let message = self.action.message.clone();
        let value = dispatch(self.action);

        if !self.rejects {
            return ready(Ok(value));
        }

        tracing::debug!(action = %kind, "Error thunk dispatched, rejecting");
        ready(Err(ThunkRejected {
            kind,
            message: message.unwrap_or_default(),
            value,
        }))
    }
}

/// Returns a creator for thunks that resolve with the dispatch result.
pub fn create_thunk(kind: impl Into<String>) -> ThunkCreator {
    ThunkCreator {
        creator: create_action(kind),
        rejects: false,
    }
}

/// Returns a creator for thunks that dispatch an error action and reject.
pub fn create_error_thunk(kind: impl Into<String>, message: Option<&str>) -> ThunkCreator {
    ThunkCreator {
        creator: create_error_action(kind, message),
        rejects: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_thunk_resolves_with_dispatch_result() {
        let thunk = create_thunk("LOAD").create(Some(json!({ "id": 1 })), None);
        let result = thunk.run(|action| action.payload).await;
        assert_eq!(result.unwrap(), json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn test_error_thunk_rejects_after_dispatch() {
        let mut dispatched = Vec::new();
        let thunk = create_error_thunk("LOAD_FAILED", Some("nope")).create_empty();

        let err = thunk
            .run(|action| {
                dispatched.push(action.clone());
                action.kind.len()
            })
            .await
            .unwrap_err();

        assert_eq!(dispatched.len(), 1);
        assert!(dispatched[0].error);
        assert_eq!(err.kind, "LOAD_FAILED");
        assert_eq!(err.message, "nope");
        assert_eq!(err.value, "LOAD_FAILED".len());
    }
}
