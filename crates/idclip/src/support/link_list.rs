// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The singly-linked engine shared by `LinkedQueue`, `LinkedSet` and
//! `LinkedPriorityQueue`.
//!
//! Nodes live in a slotmap arena and are threaded through `next` keys from
//! `front` to `rear`. Cursors track the predecessor key alongside the
//! current one, so unlinking under a cursor is O(1) without doubly linking.

use crate::{errors::CursorError, internal::ValidationError, support::origin::OriginId};
use core::fmt;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle for a list node.
    pub(crate) struct LinkKey;
}

#[derive(Clone, Debug)]
pub(crate) struct LinkNode<T> {
    pub(crate) element: T,
    pub(crate) next: Option<LinkKey>,
}

pub(crate) struct LinkList<T> {
    nodes: SlotMap<LinkKey, LinkNode<T>>,
    front: Option<LinkKey>,
    rear: Option<LinkKey>,
    mod_count: u64,
    origin: OriginId,
}

impl<T> LinkList<T> {
    pub(crate) fn new() -> Self {
        LinkList {
            nodes: SlotMap::with_key(),
            front: None,
            rear: None,
            mod_count: 0,
            origin: OriginId::mint(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) fn origin(&self) -> OriginId {
        self.origin
    }

    pub(crate) fn touch(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }

    pub(crate) fn front_key(&self) -> Option<LinkKey> {
        self.front
    }

    pub(crate) fn next_of(&self, key: LinkKey) -> Option<LinkKey> {
        self.nodes[key].next
    }

    pub(crate) fn element(&self, key: LinkKey) -> &T {
        &self.nodes[key].element
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.front.map(|key| &self.nodes[key].element)
    }

    /// Links a new node after `prev`, or at the front when `prev` is `None`.
    pub(crate) fn insert_after(
        &mut self,
        prev: Option<LinkKey>,
        element: T,
    ) -> LinkKey {
        let next = match prev {
            Some(p) => self.nodes[p].next,
            None => self.front,
        };
        let key = self.nodes.insert(LinkNode { element, next });
        match prev {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.front = Some(key),
        }
        if next.is_none() {
            self.rear = Some(key);
        }
        key
    }

    pub(crate) fn push_rear(&mut self, element: T) -> LinkKey {
        self.insert_after(self.rear, element)
    }

    /// Unlinks and removes `target`, which must be the node after `prev`
    /// (the front node when `prev` is `None`).
    pub(crate) fn unlink(
        &mut self,
        prev: Option<LinkKey>,
        target: LinkKey,
    ) -> T {
        let next = self.nodes[target].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.front = next,
        }
        if self.rear == Some(target) {
            self.rear = prev;
        }
        let node =
            self.nodes.remove(target).expect("target is linked into this list");
        node.element
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let front = self.front?;
        Some(self.unlink(None, front))
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
    }

    pub(crate) fn raw_iter(&self) -> RawLinkIter<'_, T> {
        RawLinkIter { list: self, position: self.front, remaining: self.len() }
    }

    /// The internals dump backing the containers' `Debug` impls.
    pub(crate) fn fmt_debug(
        &self,
        name: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    where
        T: fmt::Debug,
    {
        write!(f, "{name}{{chain=[")?;
        let mut cursor = self.front;
        let mut first = true;
        while let Some(key) = cursor {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{:?}", self.nodes[key].element)?;
            first = false;
            cursor = self.nodes[key].next;
        }
        write!(f, "], len={}, mod_count={}}}", self.len(), self.mod_count)
    }

    /// Checks the structural invariants; test hook.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let err = |msg: String| ValidationError::new("linked chain", msg);
        let mut reachable = 0usize;
        let mut last = None;
        let mut cursor = self.front;
        while let Some(key) = cursor {
            if self.nodes.get(key).is_none() {
                return Err(err("chain references a freed node".to_owned()));
            }
            reachable += 1;
            if reachable > self.nodes.len() {
                return Err(err("chain cycle detected".to_owned()));
            }
            last = Some(key);
            cursor = self.nodes[key].next;
        }
        if reachable != self.nodes.len() {
            return Err(err(format!(
                "{} nodes reachable from the front, {} allocated",
                reachable,
                self.nodes.len()
            )));
        }
        if self.rear != last {
            return Err(err(
                "rear does not point at the last reachable node".to_owned(),
            ));
        }
        Ok(())
    }
}

impl<T: Clone> Clone for LinkList<T> {
    fn clone(&self) -> Self {
        LinkList {
            // slotmap clones preserve keys, so the copied front/rear and
            // chain links remain valid in the copied arena.
            nodes: self.nodes.clone(),
            front: self.front,
            rear: self.rear,
            mod_count: 0,
            origin: OriginId::mint(),
        }
    }
}

/// Borrowing iterator over a link list, front to rear.
pub(crate) struct RawLinkIter<'a, T> {
    list: &'a LinkList<T>,
    position: Option<LinkKey>,
    remaining: usize,
}

impl<T> Clone for RawLinkIter<'_, T> {
    fn clone(&self) -> Self {
        RawLinkIter {
            list: self.list,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for RawLinkIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.position?;
        self.position = self.list.next_of(key);
        self.remaining -= 1;
        Some(self.list.element(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawLinkIter<'_, T> {}
impl<T> core::iter::FusedIterator for RawLinkIter<'_, T> {}

/// Owning iterator over a link list, front to rear.
pub(crate) struct RawLinkIntoIter<T> {
    pub(crate) list: LinkList<T>,
}

impl<T> Iterator for RawLinkIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for RawLinkIntoIter<T> {}
impl<T> core::iter::FusedIterator for RawLinkIntoIter<T> {}

/// Fail-fast cursor over a link list.
///
/// Same detached contract as the hash-table cursor, plus a predecessor key
/// so the current node can be unlinked without rescanning the chain.
pub(crate) struct RawLinkCursor {
    container: &'static str,
    origin: OriginId,
    expected_mod_count: u64,
    prev: Option<LinkKey>,
    position: Option<LinkKey>,
    can_erase: bool,
}

impl RawLinkCursor {
    pub(crate) fn at_begin<T>(
        list: &LinkList<T>,
        container: &'static str,
    ) -> Self {
        RawLinkCursor {
            container,
            origin: list.origin(),
            expected_mod_count: list.mod_count(),
            prev: None,
            position: list.front_key(),
            can_erase: true,
        }
    }

    pub(crate) fn at_end<T>(
        list: &LinkList<T>,
        container: &'static str,
    ) -> Self {
        RawLinkCursor {
            container,
            origin: list.origin(),
            expected_mod_count: list.mod_count(),
            prev: list.rear,
            position: None,
            can_erase: true,
        }
    }

    fn check<T>(
        &self,
        list: &LinkList<T>,
        operation: &'static str,
    ) -> Result<(), CursorError> {
        if self.origin != list.origin() {
            return Err(CursorError::ForeignContainer {
                container: self.container,
                operation,
            });
        }
        if self.expected_mod_count != list.mod_count() {
            return Err(CursorError::Stale {
                container: self.container,
                operation,
                expected: self.expected_mod_count,
                actual: list.mod_count(),
            });
        }
        Ok(())
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.position.is_none()
    }

    /// Advances, or re-arms after a removal without moving.
    pub(crate) fn step<T>(
        &mut self,
        list: &LinkList<T>,
    ) -> Result<(), CursorError> {
        self.check(list, "step")?;
        let Some(key) = self.position else {
            // Exhausted cursors stay exhausted; stepping is a no-op.
            return Ok(());
        };
        if self.can_erase {
            self.prev = Some(key);
            self.position = list.next_of(key);
        } else {
            self.can_erase = true;
        }
        Ok(())
    }

    pub(crate) fn get<'a, T>(
        &self,
        list: &'a LinkList<T>,
        operation: &'static str,
    ) -> Result<&'a T, CursorError> {
        self.check(list, operation)?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: self.container,
                operation,
            });
        }
        match self.position {
            Some(key) => Ok(list.element(key)),
            None => Err(CursorError::Exhausted {
                container: self.container,
                operation,
            }),
        }
    }

    /// Removes the current element. The cursor slides to the following
    /// element first (the predecessor stays put), then the node is
    /// unlinked; until the next `step`, the cursor cannot be read or asked
    /// to remove again.
    pub(crate) fn remove<T>(
        &mut self,
        list: &mut LinkList<T>,
    ) -> Result<T, CursorError> {
        self.check(list, "remove")?;
        if !self.can_erase {
            return Err(CursorError::Consumed {
                container: self.container,
                operation: "remove",
            });
        }
        let Some(key) = self.position else {
            return Err(CursorError::Exhausted {
                container: self.container,
                operation: "remove",
            });
        };
        self.position = list.next_of(key);
        self.can_erase = false;
        let element = list.unlink(self.prev, key);
        list.touch();
        self.expected_mod_count = list.mod_count();
        Ok(element)
    }

    /// Whether two cursors sit on the same element of `list`.
    pub(crate) fn same_position<T>(
        &self,
        other: &Self,
        list: &LinkList<T>,
    ) -> Result<bool, CursorError> {
        if self.origin != list.origin() || other.origin != list.origin() {
            return Err(CursorError::ForeignContainer {
                container: self.container,
                operation: "same_position",
            });
        }
        self.check(list, "same_position")?;
        Ok(self.position == other.position)
    }
}
