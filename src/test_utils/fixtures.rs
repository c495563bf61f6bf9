use crate::{ChecklistOption, Props, Value};

/// Two numbered options, the first one checked.
pub(crate) fn numbered() -> Props {
    Props {
        id: Some("numbers".into()),
        options: vec![ChecklistOption::new("A", 1), ChecklistOption::new("B", 2)],
        value: vec![Value::from(1)],
        ..Props::default()
    }
}

pub(crate) fn fruits() -> Props {
    static DATA: &str = r#"{
        "id": "fruits",
        "options": [
            {"label": "Apple", "value": "apple"},
            {"label": "Banana", "value": "banana", "disabled": true},
            {"label": "Cherry", "value": "cherry", "label_id": "cherry-label"}
        ],
        "value": ["banana", "cherry"],
        "inputClassName": "fruit",
        "inputCheckedClassName": "fruit-on",
        "inputStyle": {"marginTop": 2},
        "inputCheckedStyle": {"outlineColor": "red"},
        "labelClassName": "fruit-label",
        "labelCheckedClassName": "fruit-label-on",
        "labelStyle": {"color": "black"},
        "labelCheckedStyle": {"color": "green", "fontWeight": "bold"}
    }"#;

    serde_json::from_str(DATA).unwrap()
}
