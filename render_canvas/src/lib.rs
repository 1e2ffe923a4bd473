/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use flo_canvas as canvas;
pub use flo_render::*;

pub use self::canvas_renderer::*;
pub use self::offscreen::*;

mod canvas_renderer;
mod dynamic_texture_state;
mod fill_state;
mod layer_bounds;
mod layer_handle;
mod layer_state;
mod matrix;
mod offscreen;
mod render_entity;
mod render_entity_details;
mod render_gradient;
mod render_texture;
mod renderer_core;
mod renderer_layer;
mod renderer_stream;
mod renderer_worker;
mod resource_ids;
mod stroke_settings;
mod texture_filter_request;
mod texture_render_request;
