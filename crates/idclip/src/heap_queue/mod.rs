// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A priority queue over an array-backed binary heap.
//!
//! The priority relation is an injected strict "higher than" function, not
//! [`Ord`]. Iteration never exposes the array layout: cursors and the
//! owning iterator both drain a heap in priority order.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::HeapCursor;
pub use imp::HeapQueue;
pub use iter::IntoIter;
