//! # linked_list
//!
//! A singly linked list that owns its nodes, with constant-time
//! [`append`](LinkedList::append) and [`prepend`](LinkedList::prepend),
//! positional access through [`at`](LinkedList::at), search, and removal from
//! the tail with [`pop`](LinkedList::pop).
//!
//! ```rust
//! use linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//! list.append(3);
//!
//! assert_eq!(list.to_string(), "0 -> 1 -> 2 -> 3 -> null");
//! assert_eq!(list.find(&3), Some(3));
//! assert_eq!(list.find(&4), None);
//! ```
//!
//! Searching uses the element type's `PartialEq`; `find_by`/`contains_by`
//! take a predicate instead. The list is not synchronized.

mod error;
mod iter;
mod list;
mod node;
mod report;

pub use error::ListError;
pub use iter::{Iter, Nodes};
pub use list::LinkedList;
pub use node::Node;
pub use report::{LogSink, ReportSink, WriteSink};
