/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod timeout;

mod asynchronous;
mod future_desync;
mod future_sync;
mod suspend;
mod sync;
mod thread_management;

extern crate desync;
extern crate futures;
