// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.
//!
//! These types are shared across all containers in this crate.

use core::fmt;

/// A container could not resolve its hash or ordering function at
/// construction time.
///
/// Strategy functions arrive through two channels: the marker type parameter
/// (an implementation of [`HashSource`], [`OrderSource`] or
/// [`PrioritySource`]) and the constructor argument. Construction fails if
/// neither channel supplies a function, or if both do and they disagree.
///
/// [`HashSource`]: crate::HashSource
/// [`OrderSource`]: crate::OrderSource
/// [`PrioritySource`]: crate::PrioritySource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyError {
    container: &'static str,
    constructor: &'static str,
    kind: StrategyErrorKind,
}

/// The way in which strategy resolution failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyErrorKind {
    /// Neither the marker type nor the constructor supplied a function.
    NeitherSpecified,
    /// The marker type and the constructor supplied different functions.
    BothDifferent,
}

impl StrategyError {
    pub(crate) fn new(
        container: &'static str,
        constructor: &'static str,
        kind: StrategyErrorKind,
    ) -> Self {
        StrategyError { container, constructor, kind }
    }

    /// Returns the container type that failed to construct.
    #[inline]
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// Returns the constructor that was invoked.
    #[inline]
    pub fn constructor(&self) -> &'static str {
        self.constructor
    }

    /// Returns the kind of resolution failure.
    #[inline]
    pub fn kind(&self) -> StrategyErrorKind {
        self.kind
    }
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StrategyErrorKind::NeitherSpecified => write!(
                f,
                "{}::{}: neither the marker type nor the caller specified \
                 a strategy function",
                self.container, self.constructor
            ),
            StrategyErrorKind::BothDifferent => write!(
                f,
                "{}::{}: the marker type and the caller specified different \
                 strategy functions",
                self.container, self.constructor
            ),
        }
    }
}

impl core::error::Error for StrategyError {}

/// A map operation addressed a key that is not present.
///
/// Operations that consume their key, such as `erase`, hand it back inside
/// the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyError<K> {
    container: &'static str,
    operation: &'static str,
    key: K,
}

impl<K> KeyError<K> {
    pub(crate) fn new(
        container: &'static str,
        operation: &'static str,
        key: K,
    ) -> Self {
        KeyError { container, operation, key }
    }

    /// Returns the container type the operation was applied to.
    #[inline]
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// Returns the operation that missed.
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the key that was not found.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes self, returning the key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}: key {:?} is not present",
            self.container, self.operation, self.key
        )
    }
}

impl<K: fmt::Debug> core::error::Error for KeyError<K> {}

/// A value-returning operation was applied to an empty container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyError {
    container: &'static str,
    operation: &'static str,
}

impl EmptyError {
    pub(crate) fn new(container: &'static str, operation: &'static str) -> Self {
        EmptyError { container, operation }
    }

    /// Returns the container type the operation was applied to.
    #[inline]
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// Returns the operation that required a non-empty container.
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: container is empty", self.container, self.operation)
    }
}

impl core::error::Error for EmptyError {}

/// A cursor operation could not be carried out.
///
/// Cursors do not borrow the container they traverse; every operation takes
/// the container as an argument and revalidates the cursor against it. The
/// variants cover the ways that revalidation can fail, plus the two illegal
/// cursor positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorError {
    /// The container was structurally modified out from under the cursor.
    Stale {
        /// Container type name.
        container: &'static str,
        /// Cursor operation that detected the modification.
        operation: &'static str,
        /// Modification count the cursor last synchronized with.
        expected: u64,
        /// The container's current modification count.
        actual: u64,
    },
    /// The cursor's element was removed through the cursor, and the cursor
    /// has not been advanced since.
    Consumed {
        /// Container type name.
        container: &'static str,
        /// Cursor operation that was refused.
        operation: &'static str,
    },
    /// The cursor has moved past the last element.
    Exhausted {
        /// Container type name.
        container: &'static str,
        /// Cursor operation that was refused.
        operation: &'static str,
    },
    /// The cursor was applied to a container it does not belong to.
    ForeignContainer {
        /// Container type name.
        container: &'static str,
        /// Cursor operation that was refused.
        operation: &'static str,
    },
}

impl CursorError {
    /// Returns true if the container changed behind the cursor's back.
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, CursorError::Stale { .. })
    }

    /// Returns true if the cursor's element was removed and the cursor has
    /// not moved on yet.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        matches!(self, CursorError::Consumed { .. })
    }

    /// Returns true if the cursor is past the end.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CursorError::Exhausted { .. })
    }

    /// Returns true if the cursor was applied to the wrong container.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self, CursorError::ForeignContainer { .. })
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::Stale { container, operation, expected, actual } => {
                write!(
                    f,
                    "{container} cursor {operation}: container was modified \
                     (cursor expected modification count {expected}, \
                     container is at {actual})"
                )
            }
            CursorError::Consumed { container, operation } => write!(
                f,
                "{container} cursor {operation}: element was removed through \
                 the cursor and the cursor has not been advanced"
            ),
            CursorError::Exhausted { container, operation } => write!(
                f,
                "{container} cursor {operation}: cursor is past the end"
            ),
            CursorError::ForeignContainer { container, operation } => write!(
                f,
                "{container} cursor {operation}: cursor belongs to a \
                 different container"
            ),
        }
    }
}

impl core::error::Error for CursorError {}

/// A graph failed to load from its text form.
#[derive(Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    Io(std::io::Error),
    /// A line did not have the `from<sep>to<sep>weight` shape, or its
    /// weight failed to parse.
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, as read.
        content: String,
    },
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "graph load: {err}"),
            LoadError::Malformed { line, content } => {
                write!(f, "graph load: line {line} is malformed: {content:?}")
            }
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Malformed { .. } => None,
        }
    }
}
