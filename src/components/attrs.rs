// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

/**
 A module for common attributes.

 Class and style overrides come from the host and are shared by both the
 native and the custom rendering of a row, so the merging rules live here.
*/
use crate::props::InlineStyle;
use seed::{prelude::*, Style};

/// The base style, overridden key by key by `checked_style` when `checked`.
pub(crate) fn merged_style(base: &InlineStyle, checked_style: &InlineStyle, checked: bool) -> InlineStyle {
    let mut style = base.clone();

    if checked {
        style.extend(checked_style.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    style
}

/// Converts host inline style into a seed `Style`.
///
/// `null` and boolean values are dropped.
pub(crate) fn to_style(x: &InlineStyle) -> Style {
    let mut style = Style::empty();

    for (k, v) in x {
        if let Some(v) = css_value(v) {
            style.add(St::Custom(css_property(k).into()), v);
        }
    }

    style
}

/// `fontWeight` -> `font-weight`, `WebkitTransition` -> `-webkit-transition`,
/// `msTransform` -> `-ms-transform`. Names with a dash are left alone.
pub(crate) fn css_property(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);

    if name.starts_with("ms") && name.chars().nth(2).map_or(false, char::is_uppercase) {
        out.push('-');
    }

    for c in name.chars() {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn css_value(x: &serde_json::Value) -> Option<String> {
    match x {
        serde_json::Value::Null | serde_json::Value::Bool(_) => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        x => Some(x.to_string()),
    }
}
