// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! A checklist (checkbox group) component.
//!
//! `components::checklist::view` renders inside any seed app, `mount::render_checklist`
//! mounts a standalone instance for a JavaScript host.

use cfg_if::cfg_if;

pub mod bootstrap;
pub mod components;
pub mod mount;
pub mod props;
pub mod selection;

mod error;
mod value;

#[cfg(test)]
mod test_utils;

pub use error::ChecklistError;
pub use props::{ChecklistOption, Props};
pub use value::Value;

cfg_if! {
    if #[cfg(feature = "console_log")] {
        fn init_log() {
            use log::Level;

            if let Err(e) = console_log::init_with_level(Level::Trace) {
                log::info!("Error initializing logger (it may have already been initialized): {:?}", e)
            }
        }
    } else {
        fn init_log() {}
    }
}
