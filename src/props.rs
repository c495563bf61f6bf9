// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! # Props
//!
//! The configuration surface of the checklist. The shape follows what a JavaScript host
//! hands over: camelCase keys, except for the host-managed `loading_state`,
//! `persisted_props` and `persistence_type` entries. Every field has a default, so a
//! partial object (or `null` for a list) is accepted.

use crate::{ChecklistError, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Inline CSS as a host sends it, e.g. `{"fontWeight": "bold", "marginLeft": 4}`.
pub type InlineStyle = IndexMap<String, serde_json::Value>;

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

fn null_as_true<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(d).map(|x| x.unwrap_or(true))
}

fn default_persisted_props() -> Vec<PersistedProp> {
    vec![PersistedProp::Value]
}

fn null_as_default_persisted_props<'de, D>(d: D) -> Result<Vec<PersistedProp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<PersistedProp>>::deserialize(d).map(|x| x.unwrap_or_else(default_persisted_props))
}

/// One selectable entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChecklistOption {
    pub label: Value,
    pub value: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disabled: bool,
    /// Overrides the generated id of the `<input>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// Sets an id on the `<label>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_id: Option<String>,
}

impl ChecklistOption {
    pub fn new(label: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            input_id: None,
            label_id: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;

        self
    }
}

/// Loading information the host attaches while a prop is being recomputed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LoadingState {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub prop_name: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
}

/// Persistence key. Changing it discards previously stored values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Persistence {
    Enabled(bool),
    Key(Value),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PersistedProp {
    Value,
}

/// Where a persistence layer keeps the persisted props.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceType {
    Local,
    Session,
    Memory,
}

impl Default for PersistenceType {
    fn default() -> Self {
        Self::Local
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<ChecklistOption>,
    /// The selection.
    #[serde(deserialize_with = "null_as_default")]
    pub value: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub style: InlineStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub input_class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub input_style: InlineStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub input_checked_class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub input_checked_style: InlineStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub label_class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label_style: InlineStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub label_checked_class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label_checked_style: InlineStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub inline: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub custom: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub switch: bool,
    #[serde(rename = "loading_state")]
    pub loading_state: Option<LoadingState>,
    pub persistence: Option<Persistence>,
    #[serde(rename = "persisted_props", deserialize_with = "null_as_default_persisted_props")]
    pub persisted_props: Vec<PersistedProp>,
    #[serde(rename = "persistence_type", deserialize_with = "null_as_default")]
    pub persistence_type: PersistenceType,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            id: None,
            options: vec![],
            value: vec![],
            class_name: String::new(),
            style: InlineStyle::new(),
            input_class_name: String::new(),
            input_style: InlineStyle::new(),
            input_checked_class_name: String::new(),
            input_checked_style: InlineStyle::new(),
            label_class_name: String::new(),
            label_style: InlineStyle::new(),
            label_checked_class_name: String::new(),
            label_checked_style: InlineStyle::new(),
            inline: false,
            custom: true,
            switch: false,
            loading_state: None,
            persistence: None,
            persisted_props: default_persisted_props(),
            persistence_type: PersistenceType::default(),
        }
    }
}

impl Props {
    pub fn from_json(x: serde_json::Value) -> Result<Self, ChecklistError> {
        Ok(serde_json::from_value(x)?)
    }

    pub fn is_loading(&self) -> bool {
        self.loading_state.as_ref().map(|x| x.is_loading).unwrap_or(false)
    }

    /// Shallow merges a partial prop object over the current props.
    ///
    /// Keys missing from `patch` keep their current value. `patch` must be an object.
    pub fn merge(&mut self, patch: serde_json::Value) -> Result<(), ChecklistError> {
        let patch = match patch {
            serde_json::Value::Object(x) => x,
            x => return Err(ChecklistError::NotAnObject(x.to_string())),
        };

        let mut current = match serde_json::to_value(&*self)? {
            serde_json::Value::Object(x) => x,
            x => return Err(ChecklistError::NotAnObject(x.to_string())),
        };

        current.extend(patch);

        *self = serde_json::from_value(serde_json::Value::Object(current))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let props = Props::default();

        assert!(props.options.is_empty());
        assert!(props.value.is_empty());
        assert!(props.style.is_empty());
        assert!(props.custom);
        assert!(!props.inline);
        assert!(!props.switch);
        assert_eq!(props.persisted_props, vec![PersistedProp::Value]);
        assert_eq!(props.persistence_type, PersistenceType::Local);
    }

    #[test]
    fn test_empty_object_matches_defaults() {
        let props = Props::from_json(json!({})).unwrap();

        assert_eq!(props, Props::default());
    }

    #[test]
    fn test_host_shape() {
        let props = Props::from_json(json!({
            "id": "fruits",
            "options": [
                {"label": "Apple", "value": "apple"},
                {"label": 2, "value": 2, "disabled": true}
            ],
            "value": ["apple"],
            "inputCheckedClassName": "is-on",
            "labelCheckedStyle": {"fontWeight": "bold"},
            "switch": true,
            "loading_state": {"is_loading": true, "prop_name": "value", "component_name": "fruits"},
            "persistence": true,
            "persisted_props": ["value"],
            "persistence_type": "session"
        }))
        .unwrap();

        assert_eq!(props.id.as_deref(), Some("fruits"));
        assert_eq!(props.options.len(), 2);
        assert!(!props.options[0].disabled);
        assert!(props.options[1].disabled);
        assert_eq!(props.value, vec![Value::from("apple")]);
        assert_eq!(props.input_checked_class_name, "is-on");
        assert_eq!(props.label_checked_style["fontWeight"], json!("bold"));
        assert!(props.switch);
        assert!(props.is_loading());
        assert_eq!(props.persistence, Some(Persistence::Enabled(true)));
        assert_eq!(props.persistence_type, PersistenceType::Session);
    }

    #[test]
    fn test_null_lists_are_empty() {
        let props = Props::from_json(json!({"options": null, "value": null, "style": null})).unwrap();

        assert!(props.options.is_empty());
        assert!(props.value.is_empty());
        assert!(props.style.is_empty());
    }

    #[test]
    fn test_null_flags_take_prop_defaults() {
        let props = Props::from_json(json!({
            "custom": null,
            "persisted_props": null,
            "persistence_type": null
        }))
        .unwrap();

        assert_eq!(props, Props::default());
        assert!(props.custom);
    }

    #[test]
    fn test_merge_with_null_custom_keeps_other_keys() {
        let mut props = Props::from_json(json!({"options": [{"label": "A", "value": 1}]})).unwrap();

        props.merge(json!({"custom": null, "value": [1]})).unwrap();

        assert!(props.custom);
        assert_eq!(props.value, vec![Value::from(1)]);
    }

    #[test]
    fn test_persistence_key() {
        let props = Props::from_json(json!({"persistence": "user-1"})).unwrap();

        assert_eq!(props.persistence, Some(Persistence::Key(Value::from("user-1"))));
    }

    #[test]
    fn test_not_loading_without_state() {
        assert!(!Props::default().is_loading());
    }

    #[test]
    fn test_merge_keeps_untouched_keys() {
        let mut props = Props::from_json(json!({
            "id": "a",
            "options": [{"label": "A", "value": 1}],
            "custom": false
        }))
        .unwrap();

        props.merge(json!({"value": [1]})).unwrap();

        assert_eq!(props.id.as_deref(), Some("a"));
        assert_eq!(props.options.len(), 1);
        assert!(!props.custom);
        assert_eq!(props.value, vec![Value::from(1)]);
    }

    #[test]
    fn test_merge_rejects_non_objects() {
        let mut props = Props::default();

        assert!(props.merge(json!([1, 2])).is_err());
        assert_eq!(props, Props::default());
    }
}
