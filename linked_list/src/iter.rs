use crate::node::Node;
use std::iter::FusedIterator;

/// Borrowing iterator over the nodes of a list, head first.
pub struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>, size: usize) -> Self {
        Self {
            next: head,
            remaining: size,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            self.remaining = self.remaining.saturating_sub(1);
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> FusedIterator for Nodes<'_, T> {}

/// Borrowing iterator over the values of a list, head first.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: Nodes<'a, T>) -> Self {
        Self { nodes }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
