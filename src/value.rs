// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar that is either a string or a number.
///
/// Option labels and values arrive from the host untyped, so both shapes are kept
/// as they were received. A string never equals a number, `"1" != 1`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{}", x),
            Self::Text(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Self::Text(x.to_string())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Self::Text(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Self::Number(x.into())
    }
}

impl From<u64> for Value {
    fn from(x: u64) -> Self {
        Self::Number(x.into())
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Self::Number(x.into())
    }
}
