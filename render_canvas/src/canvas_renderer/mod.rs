/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use self::canvas_renderer::*;

mod canvas_renderer;
mod tessellate_build_path;
mod tessellate_font;
mod tessellate_frame;
mod tessellate_gradients;
mod tessellate_layers;
mod tessellate_namespaces;
mod tessellate_path;
mod tessellate_properties;
mod tessellate_sprites;
mod tessellate_state;
mod tessellate_textures;
mod tessellate_transform;
