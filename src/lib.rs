//! A doubly linked list with sentinels and node handles, backed by a vector.
//!
//! This crate provides two lists. `DLList<T>` is a doubly linked list whose
//! ends are marked by two sentinel nodes, so every real node always has a
//! predecessor and a successor. Inserting or removing next to a node you
//! hold a handle to is O(1). `IndexedList<T>` wraps a `DLList<T>` and keeps
//! a vector of its nodes in list order, making lookup by position O(1) too.
//!
//! Rather than heap allocating each node, all nodes are stored in a vector,
//! and a `Node` handle names a slot in it.
//!
//! # Safety
//!
//! This crate uses `#![deny(unsafe_code)]` to ensure everything is implemented
//! in 100% Safe Rust.
//!
//! # Generational handles
//!
//! `Node` uses a generations scheme, so that if you hold a `Node` and it's
//! unlinked, and a new node is allocated in its place, you do not access the
//! new node. Every operation given a stale handle fails with
//! `Error::NotLinked`.
//!
//! # Iterating while mutating
//!
//! Iterators borrow the list, so the borrow checker rejects changing a list
//! while one of its iterators is still in use.
//!
//! # Examples
//!
//! Creating a list, appending nodes, and printing them out:
//!
//! ```
//! use dllist::DLList;
//!
//! let mut list = DLList::new();
//!
//! list.append(5);
//! list.append(10);
//! list.append(15);
//!
//! // This prints 5, 10, and then 15, each on its own line
//! for element in list.iter() {
//!     println!("{}", element);
//! }
//! ```
//!
//! Splicing next to a node you already hold:
//!
//! ```
//! use dllist::dllist;
//!
//! let mut list = dllist![1, 3, 4];
//!
//! let one = list.head_node().unwrap();
//! let three = list.following(one).unwrap();
//!
//! list.precede(three, 2).unwrap();
//! list.unlink(one).unwrap();
//!
//! assert_eq!(list.to_string(), "DLList(2, 3, 4)");
//! ```
//!
//! Generational handles:
//!
//! ```
//! use dllist::{DLList, Error};
//!
//! let mut list = DLList::new();
//!
//! let five = list.append(5);
//! list.append(10);
//!
//! list.unlink(five).unwrap();
//!
//! // since we have a free slot, this will go where 5 was
//! list.append(15);
//!
//! // our handle is out of date, and so will not return 15 here
//! assert_eq!(list.element(five), Err(Error::NotLinked));
//! ```

#![deny(unsafe_code)]

mod error;
mod indexed;
mod iter;
mod list;
mod observer;

pub use crate::error::{Error, Result};
pub use crate::indexed::IndexedList;
pub use crate::iter::{IntoIter, Iter, Nodes};
pub use crate::list::{DLList, Node};
pub use crate::observer::NodeObserver;

/// Creates a `DLList` holding the given elements, in order.
///
/// # Examples
///
/// ```
/// use dllist::dllist;
///
/// let list = dllist![3, 4, 5];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_string(), "DLList(3, 4, 5)");
/// ```
#[macro_export]
macro_rules! dllist {
    () => {
        $crate::DLList::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut list = $crate::DLList::new();
        $(list.append($element);)+
        list
    }};
}
