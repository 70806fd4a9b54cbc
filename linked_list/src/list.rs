use crate::error::ListError;
use crate::iter::{Iter, Nodes};
use crate::node::{Link, Node, release_chain};
use log::{debug, trace};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Singly linked list with O(1) insertion at both ends.
///
/// `head` owns the chain; `tail` is a non-owning pointer to its last node.
/// `size == 0` exactly when both are empty, and following `next` from `head`
/// `size - 1` times always lands on `tail`.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// The list owns every node it points to, same as `Box<Node<T>>` would.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Adds `value` after the current tail. O(1).
    pub fn append(&mut self, value: T) {
        let node = Node::leak(value, None);

        match self.tail {
            // SAFETY: `tail` points at the last node of the chain owned by
            // `head`, and `&mut self` guarantees nobody else borrows it. Only
            // the `next` field is written, no reference to the node is made.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.size += 1;
    }

    /// Adds `value` before the current head. O(1).
    pub fn prepend(&mut self, value: T) {
        let node = Node::leak(value, self.head);

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.size += 1;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn head(&self) -> Option<&Node<T>> {
        // SAFETY: `head` is either empty or the owned start of the chain; the
        // returned borrow is tied to `&self`.
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    pub fn tail(&self) -> Option<&Node<T>> {
        // SAFETY: `tail` is either empty or points into the chain owned by
        // `self`; the returned borrow is tied to `&self`.
        self.tail.map(|tail| unsafe { &*tail.as_ptr() })
    }

    /// Returns the node at `index`, counting from the head. O(n).
    ///
    /// Fails for every `index >= size`, which on an empty list means every index.
    pub fn at(&self, index: usize) -> Result<&Node<T>, ListError> {
        if index >= self.size {
            debug!("rejected index {} on list of size {}", index, self.size);
            return Err(ListError::out_of_range(index as i128, self.size));
        }

        self.nodes()
            .nth(index)
            .ok_or_else(|| ListError::out_of_range(index as i128, self.size))
    }

    /// Same as [`LinkedList::at`] for callers holding a signed position.
    /// Negative indices are out of range.
    pub fn at_signed(&self, index: i64) -> Result<&Node<T>, ListError> {
        match usize::try_from(index) {
            Ok(index) => self.at(index),
            Err(_) => {
                debug!("rejected index {} on list of size {}", index, self.size);
                Err(ListError::out_of_range(i128::from(index), self.size))
            }
        }
    }

    /// Unlinks and returns the last node, or `None` if the list is empty.
    ///
    /// O(n): the node before the tail has to be found by walking from the head.
    pub fn pop(&mut self) -> Option<Node<T>> {
        let last = match self.size {
            0 => return None,
            1 => {
                self.tail = None;
                self.head.take()?
            }
            // SAFETY: with two or more nodes every pointer followed here is a
            // live node of the chain, and `&mut self` rules out other borrows.
            _ => unsafe {
                let mut current = self.head?;
                while let Some(next) = (*current.as_ptr()).next {
                    if (*next.as_ptr()).next.is_none() {
                        break;
                    }
                    current = next;
                }
                let last = (*current.as_ptr()).next.take()?;
                self.tail = Some(current);
                last
            },
        };

        self.size -= 1;
        trace!("popped tail, {} node(s) left", self.size);

        // SAFETY: `last` came from `Node::leak` and is no longer reachable
        // from the chain, so this is its only owner.
        let node = unsafe { Box::from_raw(last.as_ptr()) };
        Some(*node)
    }

    /// True if any value equals `value` under the element type's `PartialEq`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().any(|v| v == value)
    }

    /// Index of the first value equal to `value`, scanning from the head.
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.find_by(predicate).is_some()
    }

    /// Index of the first value matching `predicate`, for element types whose
    /// `PartialEq` is not the comparison wanted.
    pub fn find_by<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(|v| predicate(v))
    }

    /// Drops every node. Iterative, so very long chains do not recurse.
    pub fn clear(&mut self) {
        release_chain(self.head.take());
        self.tail = None;
        if self.size > 0 {
            trace!("cleared {} node(s)", self.size);
        }
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.nodes())
    }

    /// Walks the chain node by node from the head.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.head(), self.size)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `v1 -> v2 -> ... -> null`, or just `null` when empty.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("null")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
