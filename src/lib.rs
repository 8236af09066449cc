//! A singly linked list built from an owned chain of nodes.
//!
//! ```
//! use singly_linked_list::{ListError, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::new();
//! list.add(17);
//! list.add(23);
//! list.add(43);
//! assert_eq!(list.to_string(), "[43, 23, 17]");
//!
//! let popped = list.pop(1)?;
//! assert_eq!(*popped.data(), 23);
//! assert_eq!(list.to_string(), "[43, 17]");
//!
//! assert_eq!(list.insert(99, 2), Err(ListError::IndexOutOfRange { index: 2 }));
//! # Ok::<(), ListError>(())
//! ```

mod error;
mod list;
mod node;
mod serialization;

pub use error::{ListError, Result};
pub use list::SinglyLinkedList;
pub use node::Node;
