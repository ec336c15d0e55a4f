//! HTTP-facing helpers.
//!
//! Nothing here performs I/O. The transport lives outside this crate: it hands
//! [`Response`] descriptors to the pipeline and receives fetch [`Action`]s
//! describing requests to perform.
//!
//! [`Action`]: crate::action::Action

mod fetch;
mod response;
mod status;

pub use fetch::{
    named_api_fetch_wrapper, NamedApiFetch, DEFAULT_ACCEPT_VERSION, DEFAULT_SUFFIX,
    FETCH_ACTION_TYPE,
};
pub use response::{
    encode_response, fetch_action_callback, fetch_callback, parse, parse_if_string,
    status_filter, Body, FetchCallback, HeaderFn, HeaderLookup, Response, ResponseError,
    ResponseHandler,
};
pub use status::{
    is_success, is_unauthorized, status_code_gte, status_code_lt, status_is, status_within_range,
    HasStatus, StatusPredicate,
};
