// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A priority queue kept sorted in a singly-linked chain.
//!
//! Enqueue walks to the insertion point, dequeue takes the front; the chain
//! is always in priority order, so unlike [`HeapQueue`](crate::HeapQueue)
//! this queue has a borrowing iterator.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::LinkedPriorityCursor;
pub use imp::LinkedPriorityQueue;
pub use iter::{IntoIter, Iter};
