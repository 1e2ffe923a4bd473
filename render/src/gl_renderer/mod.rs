/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod gl_renderer;

mod buffer;
mod error;
mod render_target;
mod shader;
mod shader_collection;
mod shader_program;
mod shader_uniforms;
mod standard_shader_programs;
mod texture;
mod vertex;
mod vertex_array;

pub use self::gl_renderer::*;

pub use self::buffer::*;
pub use self::error::*;
pub use self::render_target::*;
pub use self::shader::*;
pub use self::shader_program::*;
pub use self::shader_uniforms::*;
pub use self::standard_shader_programs::*;
pub use self::texture::*;
pub use self::vertex::*;
pub use self::vertex_array::*;
