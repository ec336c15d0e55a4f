//! Helpers for writing state-management modules in a unidirectional
//! data flow architecture.
//!
//! ```text
//! ActionCreator ──→ Action ──→ Reducer ──→ State
//!                     ↑
//! Response ──→ status_filter ──→ fetch_callback
//! ```
//!
//! - [`action`]: action and thunk constructors
//! - [`reducer`]: map-based reducers and reducer composition
//! - [`lens`]: get/set accessors over JSON object paths
//! - [`http`]: status predicates, response unwrapping, fetch action wrappers
//! - [`config`]: API naming defaults and the process-wide app identity

pub mod action;
pub mod config;
pub mod http;
pub mod lens;
pub mod reducer;

pub use action::{
    action_creator_or_new, create_action, create_error_action, create_error_thunk, create_thunk,
    Action, ActionCreator, CreatorSource, Thunk, ThunkCreator, ThunkRejected,
};
pub use config::{ApiConfig, AppIdentity, ConfigError};
pub use http::{
    encode_response, fetch_action_callback, fetch_callback, is_success, is_unauthorized,
    named_api_fetch_wrapper, parse, parse_if_string, status_code_gte, status_code_lt,
    status_filter, status_is, status_within_range, Body, FetchCallback, HasStatus, HeaderFn,
    HeaderLookup, NamedApiFetch, Response, ResponseError, ResponseHandler, StatusPredicate,
};
pub use lens::{
    create_selector, create_setter, get_lens, lens_cache_len, Lens, LensError, Path, Selector,
    Setter,
};
pub use reducer::{
    create_handler, create_reducer, reduce_reducers, ActionMap, CombinedReducer, Handler,
    MapReducer, Reducer,
};
