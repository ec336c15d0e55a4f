use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::Reducer;
use crate::action::Action;

/// Transition for one action type: `(state, action) -> partial or full state`.
pub type Handler = Arc<dyn Fn(&Value, &Action) -> Value + Send + Sync>;

/// Mapping from action type to handler.
#[derive(Clone, Default)]
pub struct ActionMap {
    handlers: HashMap<String, Handler>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous handler.
    pub fn on<F>(mut self, kind: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value, &Action) -> Value + Send + Sync + 'static,
    {
        self.handlers.insert(kind.into(), Arc::new(handler));
        self
    }

    /// Register an already shared handler.
    pub fn on_handler(mut self, kind: impl Into<String>, handler: Handler) -> Self {
        self.handlers.insert(kind.into(), handler);
        self
    }

    /// Merge `other` into this map; `other` wins on key collisions.
    pub fn merge(mut self, other: ActionMap) -> Self {
        self.handlers.extend(other.handlers);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&Handler> {
        self.handlers.get(kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ActionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ActionMap").field("kinds", &kinds).finish()
    }
}

/// Reducer built by [`create_reducer`].
#[derive(Debug, Clone)]
pub struct MapReducer {
    default_state: Value,
    actions: ActionMap,
}

impl MapReducer {
    /// Returns true if an action of this type has a handler.
    pub fn handles(&self, kind: &str) -> bool {
        self.actions.get(kind).is_some()
    }

    pub fn default_state(&self) -> &Value {
        &self.default_state
    }
}

impl Reducer for MapReducer {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let state = state.unwrap_or_else(|| self.default_state.clone());

        let result = match self.actions.get(&action.kind) {
            Some(handler) => handler(&state, action),
            None => {
                tracing::trace!(action = %action.kind, "No handler registered, keeping state");
                return state;
            }
        };

        merge_by_state_type(state, result, &action.kind)
    }
}

/// Mapping states take partial updates; every other state is replaced.
fn merge_by_state_type(state: Value, result: Value, kind: &str) -> Value {
    match (state, result) {
        (Value::Object(mut current), Value::Object(update)) => {
            current.extend(update);
            Value::Object(current)
        }
        (Value::Object(current), Value::Null) => Value::Object(current),
        (Value::Object(current), other) => {
            tracing::warn!(
                action = %kind,
                result = %other,
                "Handler returned a non-object update for object state, ignoring"
            );
            Value::Object(current)
        }
        (_, result) => result,
    }
}

/// Build a reducer from a default state and any number of action maps.
///
/// Maps are merged in order before any lookup, so later maps win.
///
/// On object state, object results are shallow-merged and `null` keeps the
/// state. Any other result (array, string, number, bool) is dropped with a
/// warning rather than spread into index keys.
pub fn create_reducer<I>(default_state: Value, maps: I) -> MapReducer
where
    I: IntoIterator<Item = ActionMap>,
{
    let actions = maps
        .into_iter()
        .fold(ActionMap::new(), |merged, map| merged.merge(map));

    MapReducer {
        default_state,
        actions,
    }
}

/// Handler that stores the action payload under `key`, ignoring state.
pub fn create_handler(key: impl Into<String>) -> Handler {
    let key = key.into();
    Arc::new(move |_state: &Value, action: &Action| {
        let mut update = Map::new();
        update.insert(key.clone(), action.payload.clone());
        Value::Object(update)
    })
}
