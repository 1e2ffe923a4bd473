/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod basic_sprite;
mod basic_texture;
mod blend;
mod solid_color;
mod source_over;
mod transformed_sprite;

pub use basic_sprite::*;
pub use basic_texture::*;
pub use blend::*;
pub use solid_color::*;
pub use source_over::*;
pub use transformed_sprite::*;
