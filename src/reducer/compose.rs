use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Reducer;
use crate::action::Action;

/// Reducers applied left to right over one action.
#[derive(Clone, Default)]
pub struct CombinedReducer {
    reducers: Vec<Arc<dyn Reducer>>,
}

impl CombinedReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reducer to the end of the chain.
    pub fn then<R>(mut self, reducer: R) -> Self
    where
        R: Reducer + 'static,
    {
        self.reducers.push(Arc::new(reducer));
        self
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl fmt::Debug for CombinedReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl Reducer for CombinedReducer {
    /// The first reducer sees `state` as given; each later one sees the
    /// previous result. An empty chain returns `state`, or `null` if absent.
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let mut reducers = self.reducers.iter();
        let Some(first) = reducers.next() else {
            return state.unwrap_or(Value::Null);
        };

        let initial = first.reduce(state, action);
        reducers.fold(initial, |acc, reducer| reducer.reduce(Some(acc), action))
    }
}

/// Compose shared reducers into one.
pub fn reduce_reducers<I>(reducers: I) -> CombinedReducer
where
    I: IntoIterator<Item = Arc<dyn Reducer>>,
{
    CombinedReducer {
        reducers: reducers.into_iter().collect(),
    }
}
