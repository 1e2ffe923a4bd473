/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use self::winit_thread::with_2d_graphics;
pub(crate) use self::winit_thread::*;
pub(crate) use self::winit_thread_event::*;

// mod event_conversion;
mod winit_runtime;
mod winit_thread;
mod winit_thread_event;
mod winit_window;
