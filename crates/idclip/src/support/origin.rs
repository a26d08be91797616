// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::sync::atomic::{AtomicU64, Ordering};

/// Identity token distinguishing container instances.
///
/// Cursors remember the token of the container that created them, and every
/// cursor operation checks it against the container it was handed. Clones
/// mint a fresh token, so cursors never follow a container across a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OriginId(u64);

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(0);

impl OriginId {
    pub(crate) fn mint() -> Self {
        OriginId(NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed))
    }
}
