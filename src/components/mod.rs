// Copyright (c) 2021 DDN. All rights reserved.
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file.

pub mod checklist;
pub mod custom_input;

pub(crate) mod attrs;
