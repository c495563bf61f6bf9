// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use crate::{
    bootstrap::bs_custom_control as bs,
    components::attrs::to_style,
    props::InlineStyle,
};
use seed::{prelude::*, *};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputType {
    Checkbox,
    Switch,
}

impl From<bool> for InputType {
    /// `true` selects the switch.
    fn from(switch: bool) -> Self {
        if switch {
            Self::Switch
        } else {
            Self::Checkbox
        }
    }
}

/// A custom styled checkbox, rendered as a hidden native input plus
/// a label that draws the control.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomInput {
    pub id: String,
    pub input_type: InputType,
    pub label: String,
    pub label_id: Option<String>,
    pub checked: bool,
    pub disabled: bool,
    pub inline: bool,
    pub class_name: String,
    pub style: InlineStyle,
    pub label_class_name: String,
    pub label_style: InlineStyle,
}

pub fn view<T: 'static>(x: &CustomInput, on_change: EventHandler<T>) -> Node<T> {
    let mut label_attrs = attrs! { At::For => &x.id };

    if let Some(id) = &x.label_id {
        label_attrs.merge(attrs! { At::Id => id });
    }

    div![
        class![
            bs::CUSTOM_CONTROL,
            bs::CHECKBOX => x.input_type == InputType::Checkbox,
            bs::SWITCH => x.input_type == InputType::Switch,
            bs::INLINE => x.inline,
        ],
        input![
            class![bs::INPUT, x.class_name.as_str()],
            to_style(&x.style),
            attrs! {
                At::Id => &x.id,
                At::Type => "checkbox",
                At::Checked => x.checked.as_at_value(),
                At::Disabled => x.disabled.as_at_value(),
            },
            on_change,
        ],
        label![
            class![bs::LABEL, x.label_class_name.as_str()],
            to_style(&x.label_style),
            label_attrs,
            x.label.as_str(),
        ]
    ]
}
