// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A chained-hash map with caller-supplied hashing and detached, fail-fast
//! cursors.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::MapCursor;
pub use imp::HashMap;
pub use iter::{IntoIter, Iter, IterMut};
