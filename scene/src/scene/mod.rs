/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use self::scene::*;

mod background_future;
mod entity_core;
mod entity_receiver;
mod map_from_entity_type;
mod scene;
pub(crate) mod scene_core;
mod scene_waker;
