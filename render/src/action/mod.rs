/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod blend_mode;
mod color;
mod identities;
mod render_action;
mod render_action_type;
mod render_target_type;
mod shader_type;
mod texture_filter;

pub use self::blend_mode::*;
pub use self::color::*;
pub use self::identities::*;
pub use self::render_action::*;
pub use self::render_action_type::*;
pub use self::render_target_type::*;
pub use self::shader_type::*;
pub use self::texture_filter::*;
