use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::error::ListError;
use crate::{IntoIter, Iter, IterMut};

pub use self::algorithms::reverse::ReverseStrategy;
pub use self::algorithms::sort::SortAlgorithm;
pub use self::algorithms::Search;
pub use self::node::Pos;

use self::node::{connect, Arena, Node};

pub mod iterator;
mod node;

mod algorithms;

/// The `List` is a doubly-linked list whose real nodes lie strictly between
/// two sentinel nodes, the header and the trailer.
///
/// Every node, sentinels included, lives in an arena owned by the list and is
/// addressed by a [`Pos`]. Insertion and removal at a known position take
/// constant time. Accessing an element by rank takes *O*(*n*) time.
///
/// # Naming Conventions
///
/// - `from, n`: a range of `n` consecutive real nodes starting at `from`,
///   moving towards the trailer;
/// - "the `n` predecessors of `from`": the `n` real nodes immediately before
///   `from` (which may itself be the trailer), moving towards the header.
pub struct List<T> {
    nodes: Arena<T>,
    header: Pos,
    trailer: Pos,
    /// the number of real nodes
    len: usize,
}

// private methods
impl<T> List<T> {
    pub(crate) fn next_of(&self, pos: Pos) -> Pos {
        self.nodes[pos.0].next
    }

    pub(crate) fn prev_of(&self, pos: Pos) -> Pos {
        self.nodes[pos.0].prev
    }

    /// The element of a position known to be a real node.
    pub(crate) fn value(&self, pos: Pos) -> &T {
        self.nodes[pos.0].value()
    }

    /// Unlink and deallocate a real node, returning its element.
    ///
    /// The caller guarantees that `pos` is a real node of this list.
    pub(crate) fn take_node(&mut self, pos: Pos) -> T {
        let node = self.nodes.remove(pos.0);
        connect(&mut self.nodes, node.prev, node.next);
        self.len -= 1;
        node.into_value()
    }

    /// Succeeds if `pos` names a live node, sentinel or not.
    fn check_live(&self, pos: Pos) -> Result<(), ListError> {
        if self.nodes.contains(pos.0) {
            Ok(())
        } else {
            Err(ListError::InvalidPosition)
        }
    }

    fn check_real(&self, pos: Pos) -> Result<(), ListError> {
        match self.nodes.get(pos.0) {
            None => Err(ListError::InvalidPosition),
            Some(node) if node.is_sentinel() => Err(ListError::Sentinel),
            Some(_) => Ok(()),
        }
    }

    /// Check that `n` real nodes start at `from`, and return the position
    /// right after them (probably the trailer).
    ///
    /// `from` may be the trailer only when `n == 0`.
    pub(crate) fn check_range(&self, from: Pos, n: usize) -> Result<Pos, ListError> {
        self.check_live(from)?;
        if from == self.header {
            return Err(ListError::Sentinel);
        }
        let mut end = from;
        for available in 0..n {
            if end == self.trailer {
                return Err(ListError::OutOfRange {
                    requested: n,
                    available,
                });
            }
            end = self.next_of(end);
        }
        Ok(end)
    }

    /// Check that `from` (probably the trailer) has at least `n` real
    /// predecessors.
    pub(crate) fn check_predecessors(&self, from: Pos, n: usize) -> Result<(), ListError> {
        self.check_live(from)?;
        if from == self.header {
            return Err(ListError::Sentinel);
        }
        let mut p = from;
        for available in 0..n {
            p = self.prev_of(p);
            if p == self.header {
                return Err(ListError::OutOfRange {
                    requested: n,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Walk the whole chain in both directions and assert that the links
    /// agree with each other and with `len`.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn assert_links(&self) {
        assert!(self.nodes[self.header.0].prev.is_none());
        assert!(self.nodes[self.trailer.0].next.is_none());

        let mut forward = 0;
        let mut p = self.header;
        while p != self.trailer {
            let next = self.next_of(p);
            assert_eq!(self.prev_of(next), p, "broken link after {:?}", p);
            p = next;
            forward += 1;
        }
        assert_eq!(forward - 1, self.len, "forward walk disagrees with len");

        let mut backward = 0;
        let mut p = self.trailer;
        while p != self.header {
            p = self.prev_of(p);
            backward += 1;
        }
        assert_eq!(backward - 1, self.len, "backward walk disagrees with len");
        assert_eq!(self.nodes.len(), self.len + 2, "leaked or lost nodes");
    }
}

impl<T> List<T> {
    /// Create an empty `List`: the header and the trailer linked to each other.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let header = Pos(nodes.insert(Node::sentinel()));
        let trailer = Pos(nodes.insert(Node::sentinel()));
        connect(&mut nodes, header, trailer);
        Self {
            nodes,
            header,
            trailer,
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first() == self.trailer
    }

    /// Returns the number of real nodes in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.insert_as_first(2);
    /// list.insert_as_first(1);
    /// list.insert_as_last(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The header sentinel. It precedes the first real node.
    #[inline]
    pub fn header(&self) -> Pos {
        self.header
    }

    /// The trailer sentinel. It follows the last real node.
    #[inline]
    pub fn trailer(&self) -> Pos {
        self.trailer
    }

    /// The position of the first real node, or the trailer if the list is empty.
    #[inline]
    pub fn first(&self) -> Pos {
        self.next_of(self.header)
    }

    /// The position of the last real node, or the header if the list is empty.
    #[inline]
    pub fn last(&self) -> Pos {
        self.prev_of(self.trailer)
    }

    /// Returns `true` if `pos` names a real node of this list.
    pub fn is_valid(&self, pos: Pos) -> bool {
        self.check_real(pos).is_ok()
    }

    /// Returns `true` if `pos` is the header or the trailer of this list.
    pub fn is_sentinel(&self, pos: Pos) -> bool {
        pos == self.header || pos == self.trailer
    }

    /// The successor of `pos`, or `None` for the trailer or an invalid position.
    pub fn next(&self, pos: Pos) -> Option<Pos> {
        self.nodes
            .get(pos.0)
            .map(|node| node.next)
            .filter(|next| !next.is_none())
    }

    /// The predecessor of `pos`, or `None` for the header or an invalid position.
    pub fn prev(&self, pos: Pos) -> Option<Pos> {
        self.nodes
            .get(pos.0)
            .map(|node| node.prev)
            .filter(|prev| !prev.is_none())
    }

    /// Provides a reference to the element at `pos`, or `None` if `pos` is a
    /// sentinel or not a node of this list.
    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.nodes.get(pos.0).and_then(Node::element)
    }

    /// Provides a mutable reference to the element at `pos`.
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.nodes.get_mut(pos.0).and_then(Node::element_mut)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.first())
    }

    /// Provides a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.first())
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.last())
    }

    /// Provides a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.last())
    }

    /// The position of the node with rank `rank`, or `None` if `rank >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*rank*, *n* - *rank*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([10, 20, 30]);
    /// let pos = list.position(1).unwrap();
    /// assert_eq!(list.get(pos), Some(&20));
    /// assert_eq!(list.position(3), None);
    /// ```
    pub fn position(&self, rank: usize) -> Option<Pos> {
        if rank >= self.len {
            return None;
        }
        // walk from whichever end is nearer: [h--->r      t] or [h     r<---t]
        if rank <= self.len - rank {
            let mut p = self.first();
            (0..rank).for_each(|_| p = self.next_of(p));
            Some(p)
        } else {
            let mut p = self.last();
            (rank + 1..self.len).for_each(|_| p = self.prev_of(p));
            Some(p)
        }
    }

    /// Inserts `elt` as the first element, returning its position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_as_first(&mut self, elt: T) -> Pos {
        self.len += 1;
        Node::insert_as_succ(&mut self.nodes, self.header, elt)
    }

    /// Inserts `elt` as the last element, returning its position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_as_last(&mut self, elt: T) -> Pos {
        self.len += 1;
        Node::insert_as_pred(&mut self.nodes, self.trailer, elt)
    }

    /// Inserts `elt` immediately before `pos`, returning the new position.
    ///
    /// `pos` may be the trailer, which appends `elt`.
    ///
    /// # Errors
    ///
    /// [`ListError::Sentinel`] if `pos` is the header;
    /// [`ListError::InvalidPosition`] if `pos` is not a node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::from([1, 3]);
    /// let three = list.last();
    /// list.insert_before(three, 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.insert_before(list.header(), 0), Err(ListError::Sentinel));
    /// ```
    pub fn insert_before(&mut self, pos: Pos, elt: T) -> Result<Pos, ListError> {
        self.check_live(pos)?;
        if pos == self.header {
            return Err(ListError::Sentinel);
        }
        self.len += 1;
        Ok(Node::insert_as_pred(&mut self.nodes, pos, elt))
    }

    /// Inserts `elt` immediately after `pos`, returning the new position.
    ///
    /// `pos` may be the header, which prepends `elt`.
    ///
    /// # Errors
    ///
    /// [`ListError::Sentinel`] if `pos` is the trailer;
    /// [`ListError::InvalidPosition`] if `pos` is not a node of this list.
    pub fn insert_after(&mut self, pos: Pos, elt: T) -> Result<Pos, ListError> {
        self.check_live(pos)?;
        if pos == self.trailer {
            return Err(ListError::Sentinel);
        }
        self.len += 1;
        Ok(Node::insert_as_succ(&mut self.nodes, pos, elt))
    }

    /// Removes the node at `pos` and returns its element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`ListError::Sentinel`] if `pos` is the header or the trailer;
    /// [`ListError::InvalidPosition`] if `pos` is not a node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let two = list.position(1).unwrap();
    /// assert_eq!(list.remove(two), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert!(list.remove(two).is_err());
    /// ```
    pub fn remove(&mut self, pos: Pos) -> Result<T, ListError> {
        self.check_real(pos)?;
        Ok(self.take_node(pos))
    }

    /// Removes all elements from the `List`, returning how many there were.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.clear(), 2);
    /// assert_eq!(list.clear(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) -> usize {
        let old_len = self.len;
        while self.len > 0 {
            self.take_node(self.first());
        }
        old_len
    }

    /// Adds an element first in the list.
    #[inline]
    pub fn push_front(&mut self, elt: T) {
        self.insert_as_first(elt);
    }

    /// Appends an element to the back of a list.
    #[inline]
    pub fn push_back(&mut self, elt: T) {
        self.insert_as_last(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.take_node(self.first()))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.take_node(self.last()))
    }

    /// Deep-copies `n` consecutive elements starting at `from` into a new list.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if fewer than `n` real nodes start at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([1, 2, 3, 4]);
    /// let two = list.position(1).unwrap();
    /// let copy = list.copy_range(two, 2).unwrap();
    /// assert_eq!(copy.to_vec(), vec![2, 3]);
    /// assert!(list.copy_range(two, 4).is_err());
    /// ```
    pub fn copy_range(&self, from: Pos, n: usize) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        self.check_range(from, n)?;
        let mut list = List::new();
        let mut p = from;
        for _ in 0..n {
            list.insert_as_last(self.value(p).clone());
            p = self.next_of(p);
        }
        Ok(list)
    }

    /// Deep-copies `n` consecutive elements starting at rank `rank`.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `rank + n > len`.
    pub fn copy_rank_range(&self, rank: usize, n: usize) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        if n == 0 {
            return Ok(List::new());
        }
        match self.position(rank) {
            Some(from) => self.copy_range(from, n),
            None => Err(ListError::OutOfRange {
                requested: n,
                available: 0,
            }),
        }
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec`, in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, rank: usize) -> &T {
        match self.position(rank) {
            Some(pos) => self.value(pos),
            None => panic!("Cannot index at a rank outside of the list bounds"),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, rank: usize) -> &mut T {
        match self.position(rank) {
            Some(pos) => self.nodes[pos.0].value_mut(),
            None => panic!("Cannot index at a rank outside of the list bounds"),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::{List, ListError};
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.first(), list.trailer());
        assert_eq!(list.last(), list.header());
        list.insert_as_last(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.assert_links();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.insert_as_last(DropChecker::new(2, &dropped));
        list.insert_as_last(DropChecker::new(3, &dropped));
        list.insert_as_first(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::new();
        let two = list.insert_as_first(2);
        let one = list.insert_before(two, 1).unwrap();
        let four = list.insert_after(two, 4).unwrap();
        let three = list.insert_before(four, 3).unwrap();
        list.insert_after(list.header(), 0).unwrap();
        list.insert_before(list.trailer(), 5).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        list.assert_links();

        assert_eq!(list.remove(three), Ok(3));
        assert_eq!(list.remove(one), Ok(1));
        assert_eq!(list.to_vec(), vec![0, 2, 4, 5]);
        assert_eq!(list.len(), 4);
        list.assert_links();

        assert_eq!(list.next(two), Some(four));
        assert_eq!(list.prev(four), Some(two));
        assert_eq!(list.prev(list.header()), None);
        assert_eq!(list.next(list.trailer()), None);
    }

    #[test]
    fn list_rejects_bad_positions() {
        let mut list = List::from([1, 2]);
        let header = list.header();
        let trailer = list.trailer();
        assert_eq!(list.insert_before(header, 0), Err(ListError::Sentinel));
        assert_eq!(list.insert_after(trailer, 3), Err(ListError::Sentinel));
        assert_eq!(list.remove(header), Err(ListError::Sentinel));
        assert_eq!(list.remove(trailer), Err(ListError::Sentinel));

        let first = list.first();
        assert_eq!(list.remove(first), Ok(1));
        assert_eq!(list.remove(first), Err(ListError::InvalidPosition));
        assert!(!list.is_valid(first));
        assert_eq!(list.get(first), None);
        assert_eq!(list.get(header), None);
        assert_eq!(list.len(), 1);
        list.assert_links();
    }

    #[test]
    fn list_clear() {
        let mut empty = List::<i32>::new();
        assert_eq!(empty.clear(), 0);
        assert_eq!(empty.len(), 0);

        let mut list = List::from([1, 2, 3]);
        assert_eq!(list.clear(), 3);
        assert!(list.is_empty());
        list.assert_links();
        list.insert_as_last(4);
        assert_eq!(list.to_vec(), vec![4]);
    }

    #[test]
    fn list_rank_access() {
        let mut list = List::from([10, 20, 30, 40, 50]);
        for rank in 0..5 {
            assert_eq!(list[rank], (rank as i32 + 1) * 10);
            assert_eq!(list.get(list.position(rank).unwrap()), Some(&list[rank]));
        }
        list[3] = 44;
        assert_eq!(list.to_vec(), vec![10, 20, 30, 44, 50]);
        assert_eq!(list.position(5), None);
    }

    #[test]
    #[should_panic(expected = "Cannot index at a rank outside of the list bounds")]
    fn list_rank_out_of_bounds() {
        let list = List::from([1, 2, 3]);
        let _value = list[3];
    }

    #[test]
    fn list_copy_range() {
        let list = List::from([1, 2, 3, 4, 5]);
        let three = list.position(2).unwrap();

        let copy = list.copy_range(three, 3).unwrap();
        assert_eq!(copy.to_vec(), vec![3, 4, 5]);
        copy.assert_links();
        assert_eq!(
            list.copy_range(three, 4).unwrap_err(),
            ListError::OutOfRange {
                requested: 4,
                available: 3
            }
        );
        assert!(list.copy_range(list.trailer(), 0).unwrap().is_empty());
        assert_eq!(
            list.copy_range(list.header(), 1).unwrap_err(),
            ListError::Sentinel
        );

        assert_eq!(list.copy_rank_range(1, 2).unwrap().to_vec(), vec![2, 3]);
        assert!(list.copy_rank_range(4, 2).is_err());
        assert!(list.copy_rank_range(5, 0).unwrap().is_empty());

        let whole = list.clone();
        assert_eq!(whole, list);
        whole.assert_links();
    }

    #[test]
    fn list_copy_is_deep() {
        let list = List::from([String::from("a"), String::from("b")]);
        let mut copy = list.copy_range(list.first(), 2).unwrap();
        copy[0].push('!');
        assert_eq!(list.to_vec(), vec!["a", "b"]);
        assert_eq!(copy.to_vec(), vec!["a!", "b"]);
    }

    #[test]
    fn list_random_operations() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(42);
        let mut list = List::new();
        let mut model: Vec<u32> = Vec::new();
        for _ in 0..2000 {
            let value = rng.random_range(0..50);
            match rng.random_range(0..6) {
                0 => {
                    list.push_front(value);
                    model.insert(0, value);
                }
                1 => {
                    list.push_back(value);
                    model.push(value);
                }
                2 if !model.is_empty() => {
                    let rank = rng.random_range(0..model.len());
                    let pos = list.position(rank).unwrap();
                    list.insert_before(pos, value).unwrap();
                    model.insert(rank, value);
                }
                3 if !model.is_empty() => {
                    let rank = rng.random_range(0..model.len());
                    let pos = list.position(rank).unwrap();
                    list.insert_after(pos, value).unwrap();
                    model.insert(rank + 1, value);
                }
                4 | 5 if !model.is_empty() => {
                    let rank = rng.random_range(0..model.len());
                    let pos = list.position(rank).unwrap();
                    assert_eq!(list.remove(pos), Ok(model.remove(rank)));
                    assert!(!list.is_valid(pos));
                }
                _ => {}
            }
            assert_eq!(list.len(), model.len());
        }
        list.assert_links();
        assert_eq!(list.to_vec(), model);
    }
}
