/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod action;
mod buffer;
#[cfg(feature = "gl")]
mod gl_renderer;
#[cfg(feature = "osx-metal")]
mod metal_renderer;
mod offscreen;
#[cfg(feature = "render-wgpu")]
mod wgpu_renderer;

#[cfg(feature = "profile")]
mod profiler;

pub use self::action::*;
pub use self::buffer::*;
#[cfg(feature = "gl")]
pub use self::gl_renderer::GlRenderer;
#[cfg(feature = "osx-metal")]
pub use self::metal_renderer::MetalRenderer;
pub use self::offscreen::*;
#[cfg(feature = "render-wgpu")]
pub use self::wgpu_renderer::WgpuRenderer;

#[cfg(feature = "render-wgpu")]
pub use wgpu;
