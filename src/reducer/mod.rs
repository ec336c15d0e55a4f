//! Reducer construction and composition.
//!
//! ```text
//! ActionMap ─┐
//! ActionMap ─┼─ create_reducer(default) ──→ MapReducer ─┐
//! ActionMap ─┘                                          ├─ reduce_reducers ──→ CombinedReducer
//!                           Fn(Option<Value>, &Action) ─┘
//! ```
//!
//! - **ActionMap**: action type → handler, merged last-write-wins
//! - **MapReducer**: dispatches on `action.kind`, merging mapping states
//! - **CombinedReducer**: threads one action through several reducers in order

mod compose;
mod engine;

pub use compose::{reduce_reducers, CombinedReducer};
pub use engine::{create_handler, create_reducer, ActionMap, Handler, MapReducer};

use serde_json::Value;

use crate::action::Action;

/// Transforms state based on actions.
///
/// `state` is `None` before the first action reaches the reducer; map-based
/// reducers substitute their default state in that case.
pub trait Reducer: Send + Sync {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value;
}

impl<F> Reducer for F
where
    F: Fn(Option<Value>, &Action) -> Value + Send + Sync,
{
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        self(state, action)
    }
}
