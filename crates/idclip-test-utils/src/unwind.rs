// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::panic::AssertUnwindSafe;

/// Runs `f`, turning a panic into `None`. The indexing operators under test
/// panic with formatted messages, so `String` payloads are the common case.
pub fn catch_panic<T>(f: impl FnOnce() -> T) -> Option<T> {
    let result = std::panic::catch_unwind(AssertUnwindSafe(f));
    match result {
        Ok(value) => Some(value),
        Err(payload) => {
            if let Some(msg) = payload.downcast_ref::<String>() {
                eprintln!("caught panic: {msg}");
            } else if let Some(msg) = payload.downcast_ref::<&str>() {
                eprintln!("caught panic: {msg}");
            } else {
                eprintln!("caught unknown panic");
            }
            None
        }
    }
}
