use slab::Slab;

/// A position in a [`List`], naming either a real node or one of the two
/// sentinels.
///
/// Positions stay valid until the node they name is removed. After that the
/// slot may be reused by a later insertion, so holding a `Pos` across the
/// removal of its node is a logic error (but never a memory error).
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub(crate) usize);

impl Pos {
    /// The undefined link: `header.prev` and `trailer.next`.
    pub(crate) const NONE: Pos = Pos(usize::MAX);

    /// Returns the raw slot number, for debugging or external maps.
    ///
    /// Live nodes of one list never share a slot number.
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::collections::HashMap;
    ///
    /// let list = List::from(["a", "b"]);
    /// let labels: HashMap<usize, &str> = list
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(rank, &label)| (list.position(rank).unwrap().as_raw(), label))
    ///     .collect();
    /// assert_eq!(labels.len(), 2);
    /// assert_eq!(labels[&list.last().as_raw()], "b");
    /// assert_ne!(list.header().as_raw(), list.trailer().as_raw());
    /// ```
    pub fn as_raw(&self) -> usize {
        self.0
    }

    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }
}

pub(crate) enum Payload<T> {
    Sentinel,
    Element(T),
}

pub(crate) struct Node<T> {
    pub(crate) next: Pos,
    pub(crate) prev: Pos,
    pub(crate) payload: Payload<T>,
}

/// Backing storage of every node of a list, sentinels included.
pub(crate) type Arena<T> = Slab<Node<T>>;

impl<T> Node<T> {
    pub(crate) fn sentinel() -> Self {
        Node {
            next: Pos::NONE,
            prev: Pos::NONE,
            payload: Payload::Sentinel,
        }
    }

    fn new(prev: Pos, next: Pos, element: T) -> Self {
        Node {
            next,
            prev,
            payload: Payload::Element(element),
        }
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        matches!(self.payload, Payload::Sentinel)
    }

    pub(crate) fn element(&self) -> Option<&T> {
        match &self.payload {
            Payload::Element(element) => Some(element),
            Payload::Sentinel => None,
        }
    }

    pub(crate) fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.payload {
            Payload::Element(element) => Some(element),
            Payload::Sentinel => None,
        }
    }

    /// The element of a node known to be real.
    pub(crate) fn value(&self) -> &T {
        match &self.payload {
            Payload::Element(element) => element,
            Payload::Sentinel => unreachable!("sentinel nodes hold no element"),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        match &mut self.payload {
            Payload::Element(element) => element,
            Payload::Sentinel => unreachable!("sentinel nodes hold no element"),
        }
    }

    pub(crate) fn into_value(self) -> T {
        match self.payload {
            Payload::Element(element) => element,
            Payload::Sentinel => unreachable!("sentinel nodes hold no element"),
        }
    }

    /// Allocate a node holding `element` and splice it right before `at`.
    ///
    /// Only `at.prev`, `at.prev.next` and the new node's own links are
    /// written. `at` must not be the header.
    pub(crate) fn insert_as_pred(arena: &mut Arena<T>, at: Pos, element: T) -> Pos {
        let prev = arena[at.0].prev;
        let node = Pos(arena.insert(Node::new(prev, at, element)));
        arena[prev.0].next = node;
        arena[at.0].prev = node;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(arena, prev, node);
            assert_adjacent(arena, node, at);
        }
        node
    }

    /// Allocate a node holding `element` and splice it right after `at`.
    ///
    /// `at` must not be the trailer.
    pub(crate) fn insert_as_succ(arena: &mut Arena<T>, at: Pos, element: T) -> Pos {
        let next = arena[at.0].next;
        let node = Pos(arena.insert(Node::new(at, next, element)));
        arena[next.0].prev = node;
        arena[at.0].next = node;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(arena, at, node);
            assert_adjacent(arena, node, next);
        }
        node
    }
}

pub(crate) fn connect<T>(arena: &mut Arena<T>, prev: Pos, next: Pos) {
    arena[prev.0].next = next;
    arena[next.0].prev = prev;
}

#[cfg(debug_assertions)]
pub(crate) fn assert_adjacent<T>(arena: &Arena<T>, prev: Pos, next: Pos) {
    assert_eq!(arena[prev.0].next, next);
    assert_eq!(arena[next.0].prev, prev);
}

#[cfg(test)]
mod tests {
    use super::{connect, Arena, Node, Pos};

    fn sentinels() -> (Arena<i32>, Pos, Pos) {
        let mut arena = Arena::new();
        let header = Pos(arena.insert(Node::sentinel()));
        let trailer = Pos(arena.insert(Node::sentinel()));
        connect(&mut arena, header, trailer);
        (arena, header, trailer)
    }

    fn collect(arena: &Arena<i32>, header: Pos, trailer: Pos) -> Vec<i32> {
        let mut values = Vec::new();
        let mut p = arena[header.0].next;
        while p != trailer {
            values.push(*arena[p.0].value());
            assert_eq!(arena[arena[p.0].next.0].prev, p);
            p = arena[p.0].next;
        }
        values
    }

    #[test]
    fn node_insert_around() {
        let (mut arena, header, trailer) = sentinels();
        let two = Node::insert_as_pred(&mut arena, trailer, 2);
        Node::insert_as_succ(&mut arena, header, 1);
        Node::insert_as_succ(&mut arena, two, 4);
        let four = arena[trailer.0].prev;
        Node::insert_as_pred(&mut arena, four, 3);
        assert_eq!(collect(&arena, header, trailer), vec![1, 2, 3, 4]);
        assert!(arena[header.0].prev.is_none());
        assert!(arena[trailer.0].next.is_none());
    }

    #[test]
    fn node_payload() {
        let (mut arena, header, trailer) = sentinels();
        let one = Node::insert_as_pred(&mut arena, trailer, 1);
        assert!(arena[header.0].is_sentinel());
        assert_eq!(arena[header.0].element(), None);
        assert_eq!(arena[one.0].element(), Some(&1));
        if let Some(x) = arena[one.0].element_mut() {
            *x = 7;
        }
        assert_eq!(arena.remove(one.0).into_value(), 7);
    }
}
