/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod bindings;
mod buffer;
mod convert;
mod matrix_buffer;
mod metal_renderer;
mod pipeline_configuration;
mod render_target;

pub use self::metal_renderer::*;
pub use self::render_target::*;
