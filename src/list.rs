use std::fmt;
use std::iter;

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::node::{Link, Node};

/// A singly linked list that owns its chain of [`Node`]s.
///
/// Positions are zero-based and counted from the head. They are derived by walking the
/// chain, so everything except `add`, `is_empty` and the head accessors is O(n).
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Pushes `data` onto the front of the list. O(1).
    pub fn add(&mut self, data: T) {
        let node = Box::new(Node {
            data,
            next: self.head.take(),
        });
        self.head = Some(node);
        trace!("add: new head linked");
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the whole chain. O(n).
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Links `data` after the last node, or makes it the head of an empty list. O(n).
    pub fn append(&mut self, data: T) {
        Self::link_after(self.tail_link_mut(), data);
        trace!("append: new tail linked");
    }

    /// Inserts `data` in front of the node currently at `index`.
    ///
    /// Only occupied positions are accepted (`index < size()`). Growing the list at the
    /// tail is what [`append`](Self::append) is for, so `index == size()` is rejected.
    pub fn insert(&mut self, data: T, index: usize) -> Result<()> {
        let link = self.link_mut(index)?;
        match link.take() {
            Some(occupant) => {
                *link = Some(Box::new(Node {
                    data,
                    next: Some(occupant),
                }));
                trace!("insert: linked new node at index {}", index);
                Ok(())
            }
            None => Err(out_of_range(index)),
        }
    }

    /// Unlinks the node at `index` and returns it detached from the rest of the chain.
    pub fn pop(&mut self, index: usize) -> Result<Box<Node<T>>> {
        let link = self.link_mut(index)?;
        match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                trace!("pop: unlinked node at index {}", index);
                Ok(node)
            }
            None => Err(out_of_range(index)),
        }
    }

    /// Walks `index` links from the head and returns the link found there.
    ///
    /// The returned link is `None` when `index == size()`; callers decide whether that
    /// position is acceptable.
    fn link_mut(&mut self, index: usize) -> Result<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => return Err(out_of_range(index)),
            };
        }
        Ok(link)
    }

    /// The empty link after the last node (the head link itself for an empty list).
    pub(crate) fn tail_link_mut(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Stores a new node in the empty link `tail` and returns the link that now follows it.
    pub(crate) fn link_after(tail: &mut Link<T>, data: T) -> &mut Link<T> {
        &mut tail.insert(Box::new(Node::new(data))).next
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Reports whether any node holds a value equal to `data`. O(n).
    pub fn search(&self, data: &T) -> bool {
        self.nodes().any(|node| node.data == *data)
    }

    /// Position of the first node equal to `data`, or `None` if there is none. O(n).
    pub fn index(&self, data: &T) -> Option<usize> {
        self.nodes().position(|node| node.data == *data)
    }

    /// Removes the first node equal to `data`. Later duplicates stay in the list.
    pub fn remove(&mut self, data: &T) -> Result<()> {
        let Some(index) = self.index(data) else {
            debug!("remove: no node matched");
            return Err(ListError::ValueNotFound);
        };
        let removed = self.pop(index)?;
        trace!("remove: dropped node previously at index {}", index);
        drop(removed);
        Ok(())
    }
}

fn out_of_range(index: usize) -> ListError {
    debug!("rejected index {}: no node at that position", index);
    ListError::index_out_of_range(index)
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut tail = list.tail_link_mut();
        for node in self.nodes() {
            tail = Self::link_after(tail, node.data.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes()
            .map(|node| &node.data)
            .eq(other.nodes().map(|node| &node.data))
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, node) in self.nodes().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node.data)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|node| &node.data))
            .finish()
    }
}
