/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod pipeline;
mod pipeline_configuration;
mod render_pass_resources;
mod render_target;
mod renderer_state;
mod samplers;
mod shader_cache;
mod texture;
mod texture_settings;
mod to_buffer;
mod wgpu_renderer;
mod wgpu_shader;

mod alpha_blend_filter;
mod blur_filter;
mod displacement_map_filter;
mod mask_filter;
mod reduce_filter;

pub use self::wgpu_renderer::*;
