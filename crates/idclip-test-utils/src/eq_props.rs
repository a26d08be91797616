// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Assert equality properties.
///
/// The PartialEq implementations under test compare content across
/// containers with different strategy types, so symmetry and reflexivity
/// are not free; the tests check every direction each time. `a` and `b` may
/// be different types as long as they compare both ways.
#[allow(clippy::eq_op)]
pub fn assert_eq_props<A, B>(a: A, b: B)
where
    A: PartialEq<A> + PartialEq<B> + fmt::Debug,
    B: PartialEq<B> + PartialEq<A> + fmt::Debug,
{
    assert_eq!(a, a, "a == a");
    assert_eq!(b, b, "b == b");
    assert_eq!(a, b, "a == b");
    assert_eq!(b, a, "b == a");
}

/// Assert inequality properties, plus reflexivity while we're here.
#[allow(clippy::eq_op)]
pub fn assert_ne_props<A, B>(a: A, b: B)
where
    A: PartialEq<A> + PartialEq<B> + fmt::Debug,
    B: PartialEq<B> + PartialEq<A> + fmt::Debug,
{
    assert_eq!(a, a, "a == a");
    assert_eq!(b, b, "b == b");
    assert_ne!(a, b, "a != b");
    assert_ne!(b, a, "b != a");
}
