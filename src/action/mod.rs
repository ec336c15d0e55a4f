//! Action records and their constructors.
//!
//! An [`Action`] is the event shape consumed by reducers. Creators bind a
//! type discriminant once and stamp out actions (or thunks) on demand:
//!
//! ```text
//! create_action("T")        ──→ ActionCreator ──create()──→ Action
//! create_thunk("T")         ──→ ThunkCreator  ──create()──→ Thunk ──run(dispatch)──→ Ready<Ok>
//! create_error_thunk("T")   ──→ ThunkCreator  ──create()──→ Thunk ──run(dispatch)──→ Ready<Err>
//! ```

mod creator;
mod thunk;
mod types;

pub use creator::{
    action_creator_or_new, create_action, create_error_action, ActionCreator, CreatorSource,
    DEFAULT_ERROR_MESSAGE,
};
pub use thunk::{create_error_thunk, create_thunk, Thunk, ThunkCreator, ThunkRejected};
pub use types::{empty_object, Action};

pub(crate) use types::or_empty;
