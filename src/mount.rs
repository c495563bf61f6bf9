// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! # Mount
//!
//! Runs a checklist as its own seed app inside an element owned by a JavaScript host.
//! The host keeps the selection; every toggle is reported back as
//! `setProps({ value })`, or as a `checklist-change` event on `window` when no
//! callback was given.

use crate::{
    components::checklist::{self, next_instance},
    props::LoadingState,
    ChecklistError, Props, Value,
};
use seed::{prelude::*, window};
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsValue};
use web_sys::Element;

pub const CHANGE_EVENT: &str = "checklist-change";

pub struct Model {
    props: Props,
    instance: u32,
    set_props: Option<js_sys::Function>,
    destroyed: bool,
}

#[derive(Clone, Debug)]
pub enum Msg {
    Checklist(checklist::Msg),
    SetProps(serde_json::Value),
    SetLoadingState(Option<LoadingState>),
    Destroy,
}

#[derive(Serialize)]
struct ValueChange<'a> {
    value: &'a [Value],
}

#[derive(Serialize)]
struct ChangeDetail<'a> {
    id: Option<&'a str>,
    value: &'a [Value],
}

/// Sends the custom event up to the window, carrying with it the data.
fn dispatch_custom_event<T>(r#type: &str, data: &T) -> Result<(), ChecklistError>
where
    T: Serialize + ?Sized,
{
    let js_value = JsValue::from_serde(data)?;
    let ev = web_sys::CustomEvent::new(r#type)?;
    ev.init_custom_event_with_can_bubble_and_cancelable_and_detail(r#type, true, true, &js_value);

    window().dispatch_event(&ev)?;

    Ok(())
}

fn notify(
    id: Option<&str>,
    value: &[Value],
    set_props: Option<&js_sys::Function>,
) -> Result<(), ChecklistError> {
    match set_props {
        Some(f) => {
            let x = JsValue::from_serde(&ValueChange { value })?;

            f.call1(&JsValue::NULL, &x)?;
        }
        None => dispatch_custom_event(CHANGE_EVENT, &ChangeDetail { id, value })?,
    }

    Ok(())
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    if model.destroyed {
        return;
    }

    match msg {
        Msg::Checklist(checklist::Msg::Change(value)) => {
            log::debug!("Selection of {:?} is now {:?}", model.props.id, value);

            model.props.value = value.clone();

            // The host may call back into `set_props` synchronously,
            // so it must not run while seed holds the model.
            let id = model.props.id.clone();
            let set_props = model.set_props.clone();

            orders.perform_cmd(async move {
                if let Err(e) = notify(id.as_deref(), &value, set_props.as_ref()) {
                    log::error!("Could not report the selection change: {}", e);
                }
            });
        }
        Msg::SetProps(patch) => {
            if let Err(e) = model.props.merge(patch) {
                log::error!("Could not apply props: {}", e);
            }
        }
        Msg::SetLoadingState(x) => {
            model.props.loading_state = x;
        }
        Msg::Destroy => {
            model.destroyed = true;
            model.set_props = None;
        }
    }
}

fn view(model: &Model) -> Node<Msg> {
    checklist::view(&model.props, model.instance, Msg::Checklist)
}

#[wasm_bindgen]
pub struct ChecklistCallbacks {
    app: App<Msg, Model, Node<Msg>>,
}

#[wasm_bindgen]
impl ChecklistCallbacks {
    /// Shallow merges a partial prop object into the current props.
    pub fn set_props(&self, props: JsValue) -> Result<(), JsValue> {
        let patch: serde_json::Value = props.into_serde().map_err(ChecklistError::from)?;

        self.app.update(Msg::SetProps(patch));

        Ok(())
    }
    pub fn set_loading_state(&self, loading_state: JsValue) -> Result<(), JsValue> {
        let x: Option<LoadingState> = loading_state.into_serde().map_err(ChecklistError::from)?;

        self.app.update(Msg::SetLoadingState(x));

        Ok(())
    }
    pub fn destroy(&self) {
        self.app.update(Msg::Destroy);
    }
}

#[wasm_bindgen]
pub fn render_checklist(
    props: &JsValue,
    el: Element,
    set_props: Option<js_sys::Function>,
) -> Result<ChecklistCallbacks, JsValue> {
    crate::init_log();

    log::trace!("Incoming props: {:?}", props);

    let props = props.into_serde().map_err(ChecklistError::from)?;
    let props = Props::from_json(props)?;

    let model = Model {
        props,
        instance: next_instance(),
        set_props,
        destroyed: false,
    };

    let app = App::start(el, move |_, _| model, update, view);

    Ok(ChecklistCallbacks { app })
}
