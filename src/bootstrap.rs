// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

//! Bootstrap 4 class names used by the checklist markup.

pub mod bs_form_check {
    pub const FORM_CHECK: &str = "form-check";
    pub const INLINE: &str = "form-check-inline";
    pub const INPUT: &str = "form-check-input";
    pub const LABEL: &str = "form-check-label";
}

pub mod bs_custom_control {
    pub const CUSTOM_CONTROL: &str = "custom-control";
    pub const CHECKBOX: &str = "custom-checkbox";
    pub const SWITCH: &str = "custom-switch";
    pub const INLINE: &str = "custom-control-inline";
    pub const INPUT: &str = "custom-control-input";
    pub const LABEL: &str = "custom-control-label";
}
