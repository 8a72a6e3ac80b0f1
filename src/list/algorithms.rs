use crate::error::ListError;
use crate::list::{List, Pos};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub(crate) mod reverse;
pub(crate) mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// The outcome of an ordered [`search`](List::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Search {
    /// The rightmost node of the range holding a value equal to the target.
    Found(Pos),
    /// No node of the range equals the target; inserting it right before
    /// this position keeps the sequence non-decreasing.
    InsertBefore(Pos),
}

impl Search {
    /// Returns `true` for [`Search::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Search::Found(_))
    }

    /// The position carried by either variant.
    pub fn position(&self) -> Pos {
        match *self {
            Search::Found(pos) | Search::InsertBefore(pos) => pos,
        }
    }

    /// The position after which the target belongs: the found node itself,
    /// or the predecessor of the insertion point (probably the header).
    ///
    /// Returns `None` if the outcome does not name a live node of `list`,
    /// e.g. it came from another list or its node has been removed since.
    pub fn anchor<T>(&self, list: &List<T>) -> Option<Pos> {
        match *self {
            Search::Found(pos) => list.is_valid(pos).then(|| pos),
            Search::InsertBefore(pos) => list.prev(pos),
        }
    }
}

impl<T> List<T> {
    /// Scan the `n` predecessors of `from` right to left for the first node
    /// that is not greater than `value`.
    ///
    /// Returns `Ok` with that node, or `Err` with the node just before the
    /// scanned range (probably the header). Either way, inserting `value`
    /// right after the returned node keeps a sorted range sorted, and keeps
    /// equal elements in insertion order.
    pub(crate) fn locate<F>(
        &self,
        value: &T,
        n: usize,
        from: Pos,
        less: &mut F,
    ) -> Result<Pos, Pos>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut p = from;
        for _ in 0..n {
            p = self.prev_of(p);
            if !less(value, self.value(p)) {
                return Ok(p);
            }
        }
        Err(self.prev_of(p))
    }

    pub(crate) fn find_unchecked(&self, value: &T, n: usize, from: Pos) -> Option<Pos>
    where
        T: PartialEq,
    {
        let mut p = from;
        for _ in 0..n {
            p = self.prev_of(p);
            if self.value(p) == value {
                return Some(p);
            }
        }
        None
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Applies `visit` to every element, from the first to the last.
    ///
    /// `visit` may mutate the elements in place; the links are untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.traverse(|x| *x *= 2);
    /// assert_eq!(list.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn traverse<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        let mut p = self.first();
        while p != self.trailer {
            let node = &mut self.nodes[p.0];
            visit(node.value_mut());
            p = node.next;
        }
    }

    /// Unordered search among the `n` predecessors of `from` (which may be
    /// the trailer), right to left. Returns the matching node closest to
    /// `from`, or `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `from` has fewer than `n` real predecessors;
    /// [`ListError::Sentinel`] if `from` is the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([7, 1, 7, 2]);
    /// let hit = list.find(&7, 4, list.trailer()).unwrap().unwrap();
    /// assert_eq!(hit, list.position(2).unwrap());
    /// assert_eq!(list.find(&7, 1, list.trailer()), Ok(None));
    /// ```
    pub fn find(&self, value: &T, n: usize, from: Pos) -> Result<Option<Pos>, ListError>
    where
        T: PartialEq,
    {
        self.check_predecessors(from, n)?;
        Ok(self.find_unchecked(value, n, from))
    }

    /// Ordered search among the `n` predecessors of `from`, which must be
    /// non-decreasing.
    ///
    /// Returns [`Search::Found`] with the rightmost node equal to `value`, or
    /// [`Search::InsertBefore`] with the position before which `value` must
    /// be inserted to keep the range ordered.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, Search};
    ///
    /// let mut list = List::from([1, 3, 3, 5]);
    /// let trailer = list.trailer();
    /// assert_eq!(list.search(&3, 4, trailer), Ok(Search::Found(list.position(2).unwrap())));
    ///
    /// let outcome = list.search(&4, 4, trailer).unwrap();
    /// assert_eq!(outcome, Search::InsertBefore(list.position(3).unwrap()));
    /// list.insert_before(outcome.position(), 4).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 3, 3, 4, 5]);
    /// ```
    pub fn search(&self, value: &T, n: usize, from: Pos) -> Result<Search, ListError>
    where
        T: PartialOrd,
    {
        self.check_predecessors(from, n)?;
        let outcome = match self.locate(value, n, from, &mut |a: &T, b: &T| a < b) {
            Ok(hit) if self.value(hit) == value => Search::Found(hit),
            Ok(stop) | Err(stop) => Search::InsertBefore(self.next_of(stop)),
        };
        Ok(outcome)
    }

    /// Removes repeated elements from an unordered list, keeping the first
    /// occurrence of each value. Returns the number of removed elements.
    ///
    /// Scanning left to right, the nodes already accepted before the scan
    /// position never hold two equal values.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([5, 3, 3, 1, 4, 1]);
    /// assert_eq!(list.deduplicate(), 2);
    /// assert_eq!(list.to_vec(), vec![5, 3, 1, 4]);
    /// ```
    pub fn deduplicate(&mut self) -> usize
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return 0;
        }
        let old_len = self.len;
        let (mut p, mut accepted) = (self.first(), 0);
        while p != self.trailer {
            let next = self.next_of(p);
            if self.find_unchecked(self.value(p), accepted, p).is_some() {
                self.take_node(p);
            } else {
                accepted += 1;
            }
            p = next;
        }
        #[cfg(debug_assertions)]
        self.assert_links();
        old_len - self.len
    }

    /// Removes repeated elements from a non-decreasing list, returning the
    /// number of removed elements.
    ///
    /// On a list that is not sorted, only adjacent repeats are removed.
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
    /// let mut list = List::from([1, 1, 2, 2, 2, 3]);
    /// assert_eq!(list.uniquify(), 3);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn uniquify(&mut self) -> usize
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return 0;
        }
        let old_len = self.len;
        let mut p = self.first();
        loop {
            let q = self.next_of(p);
            if q == self.trailer {
                break;
            }
            if self.value(p) != self.value(q) {
                p = q;
            } else {
                self.take_node(q);
            }
        }
        old_len - self.len
    }
}
