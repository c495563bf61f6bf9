// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error(transparent)]
    JsonError(#[from] serde_json::error::Error),
    #[error("Expected an object, got: {0}")]
    NotAnObject(String),
    #[error("Host callback failed: {0}")]
    HostError(String),
}

impl From<JsValue> for ChecklistError {
    fn from(x: JsValue) -> Self {
        Self::HostError(x.as_string().unwrap_or_else(|| format!("{:?}", x)))
    }
}

impl From<ChecklistError> for JsValue {
    fn from(x: ChecklistError) -> Self {
        JsValue::from_str(&x.to_string())
    }
}
