/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod graph_path_debug;
mod path_to_string;

pub use self::graph_path_debug::*;
pub use self::path_to_string::*;
