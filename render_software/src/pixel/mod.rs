/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use alpha_blend_trait::*;
pub use f32_linear::*;
pub use f32_linear_texture_reader::*;
pub use pixel_program::*;
pub use pixel_program_cache::*;
pub use pixel_program_runner::*;
pub use pixel_trait::*;
pub use rgba_texture::*;
pub use texture_reader::*;
pub use to_gamma_colorspace_trait::*;
pub use u32_fixed_point::*;
pub use u32_linear::*;
pub use u32_linear_texture_reader::*;
pub use u8_rgba::*;

mod alpha_blend_trait;
mod f32_linear;
mod f32_linear_texture_reader;
pub(crate) mod gamma_lut;
mod pixel_program;
mod pixel_program_cache;
mod pixel_program_runner;
mod pixel_trait;
mod rgba_texture;
mod texture_reader;
mod to_gamma_colorspace_trait;
mod u32_fixed_point;
mod u32_linear;
mod u32_linear_texture_reader;
mod u8_rgba;
