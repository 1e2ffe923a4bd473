/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use self::bound_rope::*;
pub use self::rope_binding::*;
pub use self::rope_binding_mut::*;
pub use self::rope_ext::*;
pub use self::stream::*;

mod bound_rope;
mod core;
mod rope_binding;
mod rope_binding_mut;
mod rope_ext;
mod stream;
mod stream_state;
#[cfg(test)]
mod tests;
