//! Serde support: a list travels as a plain sequence in head-to-tail order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::list::SinglyLinkedList;

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for node in self.nodes() {
            seq.serialize_element(node.data())?;
        }
        seq.end()
    }
}

struct ListVisitor<T> {
    _marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = SinglyLinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of list values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = SinglyLinkedList::new();
        let mut tail = list.tail_link_mut();
        while let Some(value) = seq.next_element()? {
            tail = SinglyLinkedList::link_after(tail, value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SinglyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor {
            _marker: PhantomData,
        })
    }
}
