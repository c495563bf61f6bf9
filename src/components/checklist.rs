// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! # Checklist
//!
//! A group of checkboxes, one per option. The view is a pure function of `Props`:
//! activating an option hands the parent a full replacement selection through
//! `Msg::Change`, the selection itself is never mutated here.

use crate::{
    bootstrap::bs_form_check as bs,
    components::{
        attrs::{merged_style, to_style},
        custom_input::{self, CustomInput, InputType},
    },
    props::{InlineStyle, Props},
    selection, Value,
};
use seed::{prelude::*, *};
use std::sync::atomic::{AtomicU32, Ordering};

static INSTANCES: AtomicU32 = AtomicU32::new(0);

/// A fresh number for id generation when a checklist has no `id`.
pub fn next_instance() -> u32 {
    INSTANCES.fetch_add(1, Ordering::Relaxed)
}

pub type ParentMsg<T> = fn(Msg) -> T;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// The selection that should replace the current one.
    Change(Vec<Value>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    Custom,
    Native,
}

impl RenderMode {
    /// Custom rendering needs both a non-empty `id` and the `custom` flag.
    pub fn of(props: &Props) -> Self {
        let has_id = props.id.as_deref().map_or(false, |x| !x.is_empty());

        if has_id && props.custom {
            Self::Custom
        } else {
            Self::Native
        }
    }
}

/// Everything needed to draw a single option.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub label_id: Option<String>,
    pub label: String,
    pub value: Value,
    pub checked: bool,
    pub disabled: bool,
    pub input_class_name: String,
    pub input_style: InlineStyle,
    pub label_class_name: String,
    pub label_style: InlineStyle,
    /// The selection the host receives when this row is toggled.
    pub next: Vec<Value>,
}

pub fn input_id(scope: &str, value: &Value) -> String {
    format!("_checklist_{}_input_{}", scope, value)
}

fn scope(props: &Props, instance: u32) -> String {
    match props.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => instance.to_string(),
    }
}

fn merged_class(base: &str, checked_class: &str, checked: bool) -> String {
    if checked && !checked_class.is_empty() {
        format!("{} {}", base, checked_class).trim().to_string()
    } else {
        base.to_string()
    }
}

/// One row per option, in option order.
pub fn rows(props: &Props, instance: u32) -> Vec<Row> {
    let scope = scope(props, instance);

    props
        .options
        .iter()
        .map(|x| {
            let checked = selection::contains(&props.value, &x.value);

            Row {
                id: x.input_id.clone().unwrap_or_else(|| input_id(&scope, &x.value)),
                label_id: x.label_id.clone(),
                label: x.label.to_string(),
                value: x.value.clone(),
                checked,
                disabled: x.disabled,
                input_class_name: merged_class(&props.input_class_name, &props.input_checked_class_name, checked),
                input_style: merged_style(&props.input_style, &props.input_checked_style, checked),
                label_class_name: merged_class(&props.label_class_name, &props.label_checked_class_name, checked),
                label_style: merged_style(&props.label_style, &props.label_checked_style, checked),
                next: selection::toggle(&props.value, &x.value),
            }
        })
        .collect()
}

fn native_view<T: 'static>(row: &Row, inline: bool, on_change: EventHandler<T>) -> Node<T> {
    let mut label_attrs = attrs! { At::For => &row.id };

    if let Some(id) = &row.label_id {
        label_attrs.merge(attrs! { At::Id => id });
    }

    div![
        class![bs::FORM_CHECK, bs::INLINE => inline],
        input![
            class![bs::INPUT, row.input_class_name.as_str()],
            to_style(&row.input_style),
            attrs! {
                At::Id => &row.id,
                At::Type => "checkbox",
                At::Checked => row.checked.as_at_value(),
                At::Disabled => row.disabled.as_at_value(),
            },
            on_change,
        ],
        label![
            class![bs::LABEL, row.label_class_name.as_str()],
            to_style(&row.label_style),
            label_attrs,
            row.label.as_str(),
        ]
    ]
}

fn row_view<T: 'static>(props: &Props, mode: RenderMode, row: Row, p_msg: ParentMsg<T>) -> Node<T> {
    let next = row.next.clone();
    let on_change = ev(Ev::Change, move |_| p_msg(Msg::Change(next)));

    match mode {
        RenderMode::Native => native_view(&row, props.inline, on_change),
        RenderMode::Custom => custom_input::view(
            &CustomInput {
                id: row.id,
                input_type: InputType::from(props.switch),
                label: row.label,
                label_id: row.label_id,
                checked: row.checked,
                disabled: row.disabled,
                inline: props.inline,
                class_name: row.input_class_name,
                style: row.input_style,
                label_class_name: row.label_class_name,
                label_style: row.label_style,
            },
            on_change,
        ),
    }
}

/// Renders the checklist.
///
/// `instance` only matters when `props.id` is unset, see `next_instance`.
pub fn view<T: 'static>(props: &Props, instance: u32, p_msg: ParentMsg<T>) -> Node<T> {
    let mode = RenderMode::of(props);

    let mut root_attrs = class![props.class_name.as_str()];

    if let Some(id) = &props.id {
        root_attrs.merge(attrs! { At::Id => id });
    }

    if props.is_loading() {
        root_attrs.merge(attrs! { "data-dash-is-loading" => "true" });
    }

    div![
        root_attrs,
        to_style(&props.style),
        rows(props, instance)
            .into_iter()
            .map(|row| row_view(props, mode, row, p_msg))
            .collect::<Vec<_>>()
    ]
}
