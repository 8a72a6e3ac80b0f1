use crate::error::ListError;
use crate::list::node::{connect, Arena};
use crate::list::{List, Pos};
use std::cmp::Ordering;

#[cfg(feature = "random")]
use rand_core::RngCore;

/// The node-level sorting algorithms a [`List`] can run.
///
/// All of them relink nodes in place: no element is moved or cloned, and
/// no temporary storage is allocated. All of them keep equal elements in
/// their original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// *O*(*n*²). Grows a sorted prefix one node at a time.
    Insertion,
    /// *O*(*n*²). Moves the rightmost maximum of the unsorted prefix to the
    /// front of a sorted suffix.
    Selection,
    /// *O*(*n* log *n*). Splits at `n / 2`, sorts both halves and
    /// merges the right run into the left one.
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
    ];

    /// Picks one of the three algorithms uniformly at random.
    ///
    /// Name the algorithm instead when the order of operations has to be
    /// reproducible.
    #[cfg(feature = "random")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        match rng.next_u32() % 3 {
            1 => SortAlgorithm::Insertion,
            2 => SortAlgorithm::Selection,
            _ => SortAlgorithm::Merge,
        }
    }
}

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a merge sort that relinks nodes. There is no
    /// extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// let mut list = List::from([4, 2, 5, 1, 3]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(SortAlgorithm::Merge);
    }

    /// Sort the list with a comparator function, by merge sort.
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_all(SortAlgorithm::Merge, &mut |a: &T, b: &T| {
            compare(a, b) == Ordering::Less
        });
    }

    /// Sort the whole list with the given algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, SortAlgorithm};
    ///
    /// for algorithm in SortAlgorithm::ALL {
    ///     let mut list = List::from([4, 2, 5, 1, 3]);
    ///     list.sort_with(algorithm);
    ///     assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// }
    /// ```
    pub fn sort_with(&mut self, algorithm: SortAlgorithm)
    where
        T: Ord,
    {
        self.sort_all(algorithm, &mut |a: &T, b: &T| a < b);
    }

    /// Sort the whole list by insertion sort.
    pub fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(SortAlgorithm::Insertion);
    }

    /// Sort the whole list by selection sort.
    pub fn selection_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(SortAlgorithm::Selection);
    }

    /// Sort the whole list by merge sort. Same as [`List::sort`].
    pub fn merge_sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(SortAlgorithm::Merge);
    }

    /// Sort the `n` nodes starting at `from`, leaving the rest of the list
    /// untouched. Returns the new first node of the range.
    ///
    /// `from` itself may be moved by the sort, so the returned position is
    /// the one to use for the start of the sorted range.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if fewer than `n` real nodes start at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, SortAlgorithm};
    ///
    /// let mut list = List::from([9, 3, 2, 1, 0]);
    /// let from = list.position(1).unwrap();
    /// let start = list.sort_range(from, 3, SortAlgorithm::Selection).unwrap();
    /// assert_eq!(list.get(start), Some(&1));
    /// assert_eq!(list.to_vec(), vec![9, 1, 2, 3, 0]);
    /// ```
    pub fn sort_range(
        &mut self,
        from: Pos,
        n: usize,
        algorithm: SortAlgorithm,
    ) -> Result<Pos, ListError>
    where
        T: Ord,
    {
        self.sort_range_by(from, n, algorithm, T::cmp)
    }

    /// Like [`List::sort_range`], with a comparator function.
    pub fn sort_range_by<F>(
        &mut self,
        from: Pos,
        n: usize,
        algorithm: SortAlgorithm,
        mut compare: F,
    ) -> Result<Pos, ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.check_range(from, n)?;
        Ok(self.sort_nodes(from, n, algorithm, &mut |a: &T, b: &T| {
            compare(a, b) == Ordering::Less
        }))
    }

    /// Sort the `n` nodes starting at `from` with an algorithm picked
    /// uniformly at random.
    ///
    /// Intentionally non-deterministic, although every algorithm yields the
    /// same sorted sequence.
    #[cfg(feature = "random")]
    pub fn sort_random<R>(
        &mut self,
        from: Pos,
        n: usize,
        rng: &mut R,
    ) -> Result<Pos, ListError>
    where
        T: Ord,
        R: RngCore + ?Sized,
    {
        self.sort_range(from, n, SortAlgorithm::random(rng))
    }

    fn sort_all<F>(&mut self, algorithm: SortAlgorithm, less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (first, len) = (self.first(), self.len);
        self.sort_nodes(first, len, algorithm, less);
    }

    fn sort_nodes<F>(
        &mut self,
        from: Pos,
        n: usize,
        algorithm: SortAlgorithm,
        less: &mut F,
    ) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        let start = match algorithm {
            SortAlgorithm::Insertion => self.insertion_sort_nodes(from, n, less),
            SortAlgorithm::Selection => self.selection_sort_nodes(from, n, less),
            SortAlgorithm::Merge => self.merge_sort_nodes(from, n, less),
        };
        #[cfg(debug_assertions)]
        self.assert_links();
        start
    }

    fn insertion_sort_nodes<F>(&mut self, from: Pos, n: usize, less: &mut F) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        let before = self.prev_of(from);
        let mut to_sort = from;
        // The `sorted` nodes right before `to_sort` are in order, the nodes
        // from `to_sort` on are untouched.
        for sorted in 0..n {
            let next = self.next_of(to_sort);
            let anchor = match self.locate(self.value(to_sort), sorted, to_sort, less) {
                Ok(anchor) | Err(anchor) => anchor,
            };
            let to = self.next_of(anchor);
            move_node(&mut self.nodes, to_sort, to);
            to_sort = next;
        }
        self.next_of(before)
    }

    fn selection_sort_nodes<F>(&mut self, from: Pos, mut n: usize, less: &mut F) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        let head = self.prev_of(from);
        let mut tail = from;
        (0..n).for_each(|_| tail = self.next_of(tail));
        // `head..tail` is the unsorted prefix; every node in it is <= every
        // node from `tail` to the end of the range.
        while n > 1 {
            let max = self.select_max(self.next_of(head), n, less);
            move_node(&mut self.nodes, max, tail);
            tail = max;
            n -= 1;
        }
        self.next_of(head)
    }

    /// The last node holding the maximum among `n` nodes starting at `from`.
    fn select_max<F>(&self, from: Pos, n: usize, less: &mut F) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (mut max, mut current) = (from, from);
        for _ in 1..n {
            current = self.next_of(current);
            if !less(self.value(current), self.value(max)) {
                max = current;
            }
        }
        max
    }

    fn merge_sort_nodes<F>(&mut self, from: Pos, n: usize, less: &mut F) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        if n < 2 {
            return from;
        }
        let m = n >> 1;
        let mut mid = from;
        (0..m).for_each(|_| mid = self.next_of(mid));

        let start = self.merge_sort_nodes(from, m, less);
        let mid = self.merge_sort_nodes(mid, n - m, less);
        self.merge_nodes(start, m, mid, n - m, less)
    }

    /// Merge the sorted run of `n` nodes at `merged` with the sorted run of
    /// `m` nodes at `to_merge`, which immediately follows it.
    fn merge_nodes<F>(
        &mut self,
        mut merged: Pos,
        mut n: usize,
        mut to_merge: Pos,
        mut m: usize,
        less: &mut F,
    ) -> Pos
    where
        F: FnMut(&T, &T) -> bool,
    {
        let before = self.prev_of(merged);
        // Nodes of the left run never move. Nodes of the right run are moved,
        // one at a time, right before the first left node greater than them.
        while m > 0 {
            if n > 0 && !less(self.value(to_merge), self.value(merged)) {
                merged = self.next_of(merged);
                if merged == to_merge {
                    // the left run is used up, the rest of the right run is in place
                    break;
                }
                n -= 1;
            } else {
                let next = self.next_of(to_merge);
                move_node(&mut self.nodes, to_merge, merged);
                to_merge = next;
                m -= 1;
            }
        }
        self.next_of(before)
    }
}

/// Move the node `from` to the position right before `to`.
fn move_node<T>(nodes: &mut Arena<T>, from: Pos, to: Pos) {
    if from == to || nodes[from.0].next == to {
        return;
    }
    let (prev, next) = (nodes[from.0].prev, nodes[from.0].next);
    connect(nodes, prev, next);
    let to_prev = nodes[to.0].prev;
    connect(nodes, to_prev, from);
    connect(nodes, from, to);
}
