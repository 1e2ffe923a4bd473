/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use canvas_drawing::*;
pub use renderer::*;

mod canvas_drawing;
mod drawing_state;
mod layer;
mod path;
mod pixel_programs;
mod prepared_layer;
mod renderer;
mod sprite;
mod stroke;
mod texture;
mod transform;
