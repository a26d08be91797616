// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A FIFO queue over a singly-linked arena chain.
//!
//! Strategy-free: no injected function, so construction is infallible and
//! [`Default`]/[`FromIterator`] carry no panic caveats.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::QueueCursor;
pub use imp::LinkedQueue;
pub use iter::{IntoIter, Iter};
