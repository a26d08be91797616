// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A map over an unbalanced binary search tree.
//!
//! Ordering comes from an injected less-than function, not [`Ord`]; the
//! tree is never rebalanced, so worst-case depth is linear in the number of
//! entries. Cursors traverse an eager pre-order snapshot, while
//! [`BstMap::iter`] walks the live tree lazily in key order.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::BstCursor;
pub use imp::BstMap;
pub use iter::{IntoIter, Iter};
