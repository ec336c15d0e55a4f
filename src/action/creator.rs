use serde_json::Value;

use super::types::Action;

/// Message attached to error actions when the creator was given none.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Builds actions of one fixed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCreator {
    kind: String,
    error_message: Option<String>,
}

impl ActionCreator {
    /// The type stamped on every action this creator builds.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns true if this creator builds error actions.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Build an action. `None` and `Some(Value::Null)` both become `{}`.
    pub fn create(&self, payload: Option<Value>, meta: Option<Value>) -> Action {
        let mut action = Action::new(self.kind.clone(), payload, meta);
        if let Some(message) = &self.error_message {
            action.error = true;
            action.message = Some(message.clone());
        }
        action
    }

    /// Build an action with an empty payload and meta.
    pub fn create_empty(&self) -> Action {
        self.create(None, None)
    }
}

/// Returns a creator for plain actions of type `kind`.
pub fn create_action(kind: impl Into<String>) -> ActionCreator {
    ActionCreator {
        kind: kind.into(),
        error_message: None,
    }
}

/// Returns a creator for error actions of type `kind`.
///
/// Every action carries `error: true` and `message`, falling back to
/// [`DEFAULT_ERROR_MESSAGE`].
pub fn create_error_action(kind: impl Into<String>, message: Option<&str>) -> ActionCreator {
    ActionCreator {
        kind: kind.into(),
        error_message: Some(message.unwrap_or(DEFAULT_ERROR_MESSAGE).to_string()),
    }
}

/// Either an action type or a creator that already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorSource {
    Type(String),
    Creator(ActionCreator),
}

impl From<&str> for CreatorSource {
    fn from(kind: &str) -> Self {
        CreatorSource::Type(kind.to_string())
    }
}

impl From<String> for CreatorSource {
    fn from(kind: String) -> Self {
        CreatorSource::Type(kind)
    }
}

impl From<ActionCreator> for CreatorSource {
    fn from(creator: ActionCreator) -> Self {
        CreatorSource::Creator(creator)
    }
}

/// Accept "an action type" or "a pre-built creator" interchangeably.
///
/// Creators pass through unchanged; types get a fresh [`create_action`].
pub fn action_creator_or_new(source: impl Into<CreatorSource>) -> ActionCreator {
    match source.into() {
        CreatorSource::Creator(creator) => creator,
        CreatorSource::Type(kind) => create_action(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_action_defaults() {
        let action = create_action("T").create_empty();
        assert_eq!(action.kind, "T");
        assert_eq!(action.payload, json!({}));
        assert_eq!(action.meta, json!({}));
        assert!(!action.error);
        assert_eq!(action.message, None);
    }

    #[test]
    fn test_create_action_passes_payload_through() {
        let action = create_action("T").create(Some(json!({ "k": "v" })), Some(json!({ "id": 7 })));
        assert_eq!(action.payload, json!({ "k": "v" }));
        assert_eq!(action.meta, json!({ "id": 7 }));
    }

    #[test]
    fn test_null_is_treated_like_omitted() {
        let action = create_action("T").create(Some(Value::Null), Some(Value::Null));
        assert_eq!(action.payload, json!({}));
        assert_eq!(action.meta, json!({}));
    }

    #[test]
    fn test_non_object_payloads_are_kept() {
        let creator = create_action("T");
        assert_eq!(creator.create(Some(json!("text")), None).payload, json!("text"));
        assert_eq!(creator.create(Some(json!([1, 2])), None).payload, json!([1, 2]));
    }

    #[test]
    fn test_error_action_message() {
        let action = create_error_action("FAIL", Some("msg")).create_empty();
        assert!(action.error);
        assert_eq!(action.message.as_deref(), Some("msg"));

        let action = create_error_action("FAIL", None).create_empty();
        assert_eq!(action.message.as_deref(), Some(DEFAULT_ERROR_MESSAGE));
    }

    #[test]
    fn test_creator_or_new() {
        let existing = create_error_action("E", Some("boom"));
        assert_eq!(action_creator_or_new(existing.clone()), existing);

        let fresh = action_creator_or_new("T");
        assert_eq!(fresh.kind(), "T");
        assert!(!fresh.is_error());
    }
}
