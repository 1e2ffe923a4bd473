/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use edge_plan::*;
pub use edgeplan_region_renderer::*;
pub use frame_size::*;
pub use image_render::*;
pub use render_frame::*;
pub use render_slice::*;
pub use render_source_trait::*;
pub use render_target_trait::*;
pub use renderer::*;
pub use rgba_frame::*;
pub use scanline_renderer::*;
pub use terminal_render::*;
pub use u8_frame_renderer::*;

mod edge_plan;
mod edgeplan_region_renderer;
mod frame_size;
mod image_render;
mod render_frame;
mod render_slice;
mod render_source_trait;
mod render_target_trait;
mod renderer;
mod rgba_frame;
mod scanline_renderer;
mod terminal_render;
mod u8_frame_renderer;
