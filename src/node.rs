use std::fmt;
use std::iter;
use std::mem::{self, ManuallyDrop};
use std::ptr;

/// Owning link to the rest of a chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single storage cell: one value plus the subchain that follows it.
///
/// Each node owns its successor, so a chain of nodes can never contain a cycle.
/// Cloning, comparing, formatting and dropping all walk the chain in a loop, so the
/// length of the subchain never affects stack depth.
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `data`.
    pub fn new(data: T) -> Self {
        Node { data, next: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Stores `data` in this node and hands back the value it replaced.
    pub fn set_data(&mut self, data: T) -> T {
        mem::replace(&mut self.data, data)
    }

    /// Consumes the node, releasing any subchain still linked after it.
    pub fn into_data(mut self) -> T {
        drop(self.take_next());
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `data` is moved out exactly once and the
        // rest of the node (an empty link) has nothing left to release.
        unsafe { ptr::read(&this.data) }
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Links `next` after this node and hands back whatever subchain was linked before.
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        mem::replace(&mut self.next, next)
    }

    /// Detaches the subchain after this node.
    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }

    /// This node followed by every node linked after it.
    pub(crate) fn chain(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(Some(self), |node| node.next.as_deref())
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut copy = Node::new(self.data.clone());
        let mut tail = &mut copy.next;
        for node in self.chain().skip(1) {
            tail = &mut tail.insert(Box::new(Node::new(node.data.clone()))).next;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.chain()
            .map(|node| &node.data)
            .eq(other.chain().map(|node| &node.data))
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Renders the values linked after a node as a flat list.
struct Following<'a, T>(&'a Node<T>);

impl<T: fmt::Debug> fmt::Debug for Following<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.chain().skip(1).map(|node| &node.data))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("next", &Following(self))
            .finish()
    }
}
