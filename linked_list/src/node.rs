use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};

/// Owning link to the next node. The pointee was leaked from a `Box` and is
/// released exactly once, by whoever unlinks it.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A single storage cell: one value and an owned link to its successor.
///
/// `next` can only ever hold another `Node` or nothing, so a chain built from
/// nodes never points at anything else.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
    marker: PhantomData<Box<Node<T>>>,
}

// A node owns its successors exactly like a `Box<Node<T>>` chain would.
unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Self {
            value,
            next: next.map(|node| NonNull::from(Box::leak(node))),
            marker: PhantomData,
        }
    }

    /// Moves `value` into a fresh heap node and hands out its owning pointer.
    pub(crate) fn leak(value: T, next: Link<T>) -> NonNull<Node<T>> {
        let node = Box::new(Self {
            value,
            next,
            marker: PhantomData,
        });
        NonNull::from(Box::leak(node))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: `next` is either empty or owned by `self`, so it lives at
        // least as long as this borrow.
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }

    pub fn into_value(mut self) -> T {
        release_chain(self.next.take());
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `value` is read out exactly once.
        unsafe { ptr::read(&this.value) }
    }
}

/// Frees every node reachable from `link`, front to back, without recursion.
pub(crate) fn release_chain<T>(mut link: Link<T>) {
    while let Some(node) = link {
        // SAFETY: every link was produced by `Box::leak` and is owned by the
        // caller, which has already detached it from its previous owner.
        let mut node = unsafe { Box::from_raw(node.as_ptr()) };
        link = node.next.take();
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        release_chain(self.next.take());
    }
}

// Printing `next` recursively would walk the rest of the chain.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}
