/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod add;
mod chain;
mod chain_add;
mod cut;
mod full_intersect;
mod intersect;
mod ray_cast;
mod sub;

pub use self::add::*;
pub use self::chain::*;
pub use self::chain_add::*;
pub use self::cut::*;
pub use self::full_intersect::*;
pub use self::intersect::*;
pub use self::ray_cast::*;
pub use self::sub::*;
