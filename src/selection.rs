// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! # Selection
//!
//! The list of currently checked option values. The host owns it; these fns only
//! read it and build replacements.

use crate::Value;

/// Is `value` part of the selection?
pub fn contains(selection: &[Value], value: &Value) -> bool {
    selection.iter().any(|x| x == value)
}

/// Returns a new selection with `value` flipped.
///
/// A present value is removed (first occurrence only), an absent one is appended.
/// The order of every other element is kept.
pub fn toggle(selection: &[Value], value: &Value) -> Vec<Value> {
    let mut xs = selection.to_vec();

    match xs.iter().position(|x| x == value) {
        Some(idx) => {
            xs.remove(idx);
        }
        None => xs.push(value.clone()),
    }

    xs
}
