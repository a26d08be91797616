// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A set with linear membership over a singly-linked arena chain.
//!
//! No hash function is involved, so construction is infallible and
//! [`Default`] is available; the trade is O(n) membership. Useful where a
//! set value must be conjured by `get_or_default`.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::LinkedSetCursor;
pub use imp::LinkedSet;
pub use iter::{IntoIter, Iter};
