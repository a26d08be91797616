// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A chained-hash set sharing the [`HashMap`](crate::HashMap) engine and
//! cursor contract.

mod cursor;
pub(crate) mod imp;
mod iter;

pub use cursor::SetCursor;
pub use imp::HashSet;
pub use iter::{IntoIter, Iter};
